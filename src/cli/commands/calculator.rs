use crate::calculator::{is_sentinel, CalculatorAction, Digit, Operator};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "digit",
            "Type one or more digits into the calculator",
            "digit <0-9>...",
            cmd_digit,
        ),
        CommandEntry::new("decimal", "Type the decimal point", "decimal", cmd_decimal),
        CommandEntry::new(
            "operator",
            "Choose an operator, folding any pending operation",
            "operator <+|-|*|/>",
            cmd_operator,
        ),
        CommandEntry::new("evaluate", "Compute the pending operation", "evaluate", cmd_evaluate),
        CommandEntry::new("clear", "Reset the calculator", "clear", cmd_clear),
        CommandEntry::new("display", "Show the calculator display", "display", cmd_display),
    ]
}

fn cmd_digit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: digit <0-9>...".into()));
    }
    let digits = args
        .iter()
        .flat_map(|arg| arg.chars())
        .map(Digit::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    for digit in digits {
        context.calculator.apply(CalculatorAction::Digit(digit));
    }
    show_display(context);
    Ok(())
}

fn cmd_decimal(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.calculator.apply(CalculatorAction::Decimal);
    show_display(context);
    Ok(())
}

fn cmd_operator(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: operator <+|-|*|/>".into()))?;
    let op: Operator = raw.parse()?;
    context.calculator.apply(CalculatorAction::Operator(op));
    show_display(context);
    Ok(())
}

fn cmd_evaluate(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.calculator.apply(CalculatorAction::Evaluate);
    show_display(context);
    if is_sentinel(context.calculator.display()) {
        output::hint("Result is undefined; use `clear` to start over.");
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.calculator.apply(CalculatorAction::Clear);
    show_display(context);
    Ok(())
}

fn cmd_display(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_display(context);
    Ok(())
}

fn show_display(context: &ShellContext) {
    match context.calculator.pending_operator() {
        Some(op) => output::line(format!("Display: {} [{}]", context.calculator.display(), op)),
        None => output::line(format!("Display: {}", context.calculator.display())),
    }
}
