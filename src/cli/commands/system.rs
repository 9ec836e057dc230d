use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::utils::build_info;

pub fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build information", "version", cmd_version),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .get(&name.to_lowercase())
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown command `{name}`")))?;
        output::line(format!("{} - {}", entry.usage, entry.description));
        return Ok(());
    }
    output::section("Commands");
    for entry in context.registry.list() {
        output::line(format!("  {:<16} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::line(format!(
        "cash_core {} ({}, {}, built {})",
        meta.version, meta.git_hash, meta.profile, meta.timestamp
    ));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
