pub mod calculator;
pub mod ledger;
pub mod system;
pub mod tasks;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in ledger::definitions()
        .into_iter()
        .chain(calculator::definitions())
        .chain(tasks::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Parses a 1-based position typed by the user into a list index.
pub(crate) fn parse_position(raw: Option<&&str>, usage: &str) -> Result<usize, CommandError> {
    let raw = raw.ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))?;
    match raw.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{raw}` is not a valid position (positions start at 1)"
        ))),
    }
}

/// Joins free-text arguments back into one string.
pub(crate) fn join_text(args: &[&str]) -> String {
    args.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position(Some(&"1"), "x").unwrap(), 0);
        assert!(parse_position(Some(&"0"), "x").is_err());
        assert!(parse_position(Some(&"abc"), "x").is_err());
        assert!(parse_position(None, "x").is_err());
    }

    #[test]
    fn registry_contains_every_command_once() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        for name in [
            "add-transaction",
            "balance",
            "recent",
            "list",
            "overview",
            "digit",
            "decimal",
            "operator",
            "evaluate",
            "clear",
            "display",
            "add-task",
            "tasks",
            "edit-task",
            "save-task",
            "cancel-edit",
            "delete-task",
            "toggle-task",
            "help",
            "version",
            "exit",
        ] {
            assert!(registry.get(name).is_some(), "missing command {name}");
        }
    }
}
