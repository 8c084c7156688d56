use cashflow_core::SummaryService;
use cashflow_domain::Direction;

use crate::cli::core::{parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, detail, render_table, section};
use crate::cli::registry::CommandEntry;

const SUMMARY_USAGE: &str =
    "summary <monthly|category <YYYY-MM-DD> <YYYY-MM-DD> <income|expense>>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Summarise recorded transactions by month or category",
            SUMMARY_USAGE,
            cmd_summary,
        ),
        CommandEntry::new(
            "balance",
            "Show current balance, holdings, and total assets",
            "balance",
            cmd_balance,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|kind| kind.to_lowercase()).as_deref() {
        Some("monthly") => monthly(context),
        Some("category") => by_category(context, &args[1..]),
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: {SUMMARY_USAGE}"
        ))),
    }
}

fn monthly(context: &mut ShellContext) -> CommandResult {
    let ledger = context.ledger()?;
    let summaries = SummaryService::monthly_summaries(&ledger.transactions);
    if summaries.is_empty() {
        output::info("No recorded transactions yet.");
        return Ok(());
    }

    let fmt = &context.formatters;
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|summary| {
            vec![
                summary.month.to_string(),
                fmt.amount(summary.total_income),
                fmt.amount(summary.total_expense),
                fmt.amount(summary.net()),
            ]
        })
        .collect();
    section("Monthly summary");
    render_table(&["Month", "Income", "Expense", "Net"], &rows);
    Ok(())
}

fn by_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let ledger = context.ledger()?;
    let [start, end, direction] = args else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {SUMMARY_USAGE}"
        )));
    };
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let direction: Direction = direction
        .parse()
        .map_err(CommandError::InvalidArguments)?;

    let summaries =
        SummaryService::category_summaries(&ledger.transactions, start, end, direction)?;
    if summaries.is_empty() {
        output::info(format!(
            "No {} recorded between {} and {}.",
            direction.to_string().to_lowercase(),
            start,
            end
        ));
        return Ok(());
    }

    let fmt = &context.formatters;
    let total: f64 = summaries.iter().map(|summary| summary.total_amount).sum();
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|summary| {
            vec![
                summary.category_name.clone(),
                fmt.amount(summary.total_amount),
            ]
        })
        .collect();
    section(format!(
        "{} by category, {} to {}",
        if direction == Direction::Income {
            "Income"
        } else {
            "Expenses"
        },
        start,
        end
    ));
    render_table(&["Category", "Total"], &rows);
    detail(format!("  Total: {}", fmt.amount(total)));
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.ledger()?;
    let fmt = &context.formatters;
    let balance = SummaryService::current_balance(&ledger.transactions);
    let holdings = ledger.holdings_value();

    section(format!("Balance for `{}`", ledger.name));
    detail(format!("  Current balance: {}", fmt.amount(balance)));
    detail(format!("  Holdings value : {}", fmt.amount(holdings)));
    detail(format!("  Total assets   : {}", fmt.amount(balance + holdings)));
    Ok(())
}
