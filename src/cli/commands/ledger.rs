use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{SummaryService, TransactionInput, TransactionService};
use crate::currency::{format_currency, format_signed};
use crate::domain::{Displayable, Transaction};
use crate::ledger::BalanceTone;

const ADD_USAGE: &str = "add-transaction <description> <amount> <income|expense> [fixed|occasional]";

pub fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-transaction",
            "Record an income or expense",
            ADD_USAGE,
            cmd_add_transaction,
        ),
        CommandEntry::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandEntry::new(
            "recent",
            "List the most recent transactions, newest first",
            "recent [count]",
            cmd_recent,
        ),
        CommandEntry::new("list", "List every transaction in order", "list", cmd_list),
        CommandEntry::new(
            "overview",
            "Show balance, totals and recent activity",
            "overview",
            cmd_overview,
        ),
    ]
}

fn cmd_add_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 3 || args.len() > 4 {
        return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}")));
    }
    let input = TransactionInput::new(
        args[0],
        args[1],
        args[2],
        args.get(3).copied().unwrap_or("fixed"),
    );
    let id = TransactionService::add(&mut context.ledger_manager, &input)?;
    if let Some(txn) = context.ledger_manager.ledger().transaction(id) {
        output::success(format!(
            "Transaction recorded: {} {}",
            txn.display_label(),
            format_signed(txn, &context.currency)
        ));
    }
    print_balance(context);
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_balance(context);
    Ok(())
}

fn cmd_recent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args.first() {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a valid count"))
        })?,
        None => context.config.recent_limit,
    };
    let context = &*context;
    let recent = context.ledger_manager.recent(limit);
    print_rows(context, recent.into_iter());
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let context = &*context;
    print_rows(context, context.ledger_manager.transactions().iter());
    Ok(())
}

fn cmd_overview(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let overview = SummaryService::overview(
        context.ledger_manager.transactions(),
        context.config.recent_limit,
    );
    output::section("Current balance");
    output::line(balance_line(overview.balance, overview.tone, context));
    output::line(format!(
        "Income {}  Expenses {}",
        format_currency(overview.income, &context.currency),
        format_currency(overview.expenses, &context.currency)
    ));
    output::section("Latest activity");
    print_rows(context, overview.recent.iter());
    Ok(())
}

fn print_balance(context: &ShellContext) {
    let balance = context.ledger_manager.balance();
    output::line(balance_line(balance, BalanceTone::of(balance), context));
}

fn balance_line(balance: f64, tone: BalanceTone, context: &ShellContext) -> String {
    let marker = match tone {
        BalanceTone::Positive => "gain",
        BalanceTone::Negative => "loss",
    };
    format!(
        "Balance: {} ({marker})",
        format_currency(balance, &context.currency)
    )
}

fn print_rows<'a>(context: &ShellContext, rows: impl Iterator<Item = &'a Transaction>) {
    let mut printed = false;
    for txn in rows {
        printed = true;
        output::line(format!(
            "{:<40} {}",
            txn.display_label(),
            format_signed(txn, &context.currency)
        ));
    }
    if !printed {
        output::info("No transactions recorded yet.");
    }
}
