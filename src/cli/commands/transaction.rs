use cashflow_core::DateFormatter;
use cashflow_domain::{Direction, TransactionRecord};

use crate::cli::core::{
    parse_amount, parse_date, split_flags, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str =
    "add <income|expense> <YYYY-MM-DD> <amount> [category] [--extraordinary] [--future]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "add",
        "Record an income or expense in the active ledger",
        USAGE,
        cmd_add,
    )]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ledger()?;
    let record = parse_record(args)?;
    let summary = describe(context, &record);
    context.ledger_mut()?.add_transaction(record);
    output::success(summary);
    Ok(())
}

fn parse_record(args: &[&str]) -> Result<TransactionRecord, CommandError> {
    let (positional, flags) = split_flags(args);
    if positional.len() < 3 {
        return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
    }

    let direction: Direction = positional[0]
        .parse()
        .map_err(CommandError::InvalidArguments)?;
    let date = parse_date(positional[1])?;
    let amount = parse_amount(positional[2])?;

    let mut record = TransactionRecord::new(date, amount, direction);
    let category = positional[3..].join(" ");
    if !category.trim().is_empty() {
        record = record.with_category(None, category.trim());
    }

    for flag in flags {
        match flag {
            "--extraordinary" => record = record.extraordinary(),
            "--future" => record = record.future(),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown flag `{other}`; usage: {USAGE}"
                )))
            }
        }
    }
    Ok(record)
}

fn describe(context: &ShellContext, record: &TransactionRecord) -> String {
    let kind = match record.direction {
        Direction::Income => "income",
        Direction::Expense => "expense",
    };
    let mut notes = Vec::new();
    if let Some(category) = &record.category_name {
        notes.push(category.clone());
    }
    if record.is_extraordinary {
        notes.push("extraordinary".to_string());
    }
    if record.is_future {
        notes.push("planned".to_string());
    }
    let suffix = if notes.is_empty() {
        String::new()
    } else {
        format!(" ({})", notes.join(", "))
    };
    format!(
        "Recorded {} of {} on {}{}.",
        kind,
        context.formatters.amount(record.amount),
        context.formatters.format_date(record.date),
        suffix
    )
}
