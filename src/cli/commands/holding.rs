use cashflow_domain::AssetHolding;

use crate::cli::core::{parse_amount, short_id, CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, detail, render_table, section};
use crate::cli::registry::CommandEntry;

const USAGE: &str = "holding <add <name> <quantity> <current_price> [ticker]|list>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "holding",
        "Record or list asset holdings",
        USAGE,
        cmd_holding,
    )]
}

fn cmd_holding(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        Some("add") => add_holding(context, &args[1..]),
        Some("list") => list_holdings(context),
        _ => Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
}

fn add_holding(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.ledger()?;
    if !(3..=4).contains(&args.len()) {
        return Err(CommandError::InvalidArguments(
            "usage: holding add <name> <quantity> <current_price> [ticker]".into(),
        ));
    }
    let quantity = parse_amount(args[1])?;
    let price = parse_amount(args[2])?;
    let mut holding = AssetHolding::new(args[0], quantity, price);
    if let Some(ticker) = args.get(3) {
        holding = holding.with_ticker(ticker.to_ascii_uppercase());
    }

    let message = format!(
        "Holding `{}` added, worth {}.",
        holding.name,
        context.formatters.amount(holding.current_value())
    );
    context.ledger_mut()?.add_holding(holding);
    output::success(message);
    Ok(())
}

fn list_holdings(context: &mut ShellContext) -> CommandResult {
    let ledger = context.ledger()?;
    if ledger.holdings.is_empty() {
        output::info("No holdings recorded.");
        return Ok(());
    }

    let fmt = &context.formatters;
    let rows: Vec<Vec<String>> = ledger
        .holdings
        .iter()
        .map(|holding| {
            vec![
                holding.name.clone(),
                short_id(holding.id),
                holding.ticker_symbol.clone().unwrap_or_else(|| "-".into()),
                format!("{}", holding.quantity),
                fmt.amount(holding.current_price),
                fmt.amount(holding.current_value()),
            ]
        })
        .collect();

    section("Holdings");
    render_table(&["Name", "ID", "Ticker", "Quantity", "Price", "Value"], &rows);
    detail(format!("  Total: {}", fmt.amount(ledger.holdings_value())));
    Ok(())
}
