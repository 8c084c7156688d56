use std::path::{Path, PathBuf};

use cashflow_core::{storage::LedgerStorage, SummaryService};
use cashflow_domain::Ledger;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{self, detail, section};
use crate::cli::registry::CommandEntry;

const USAGE: &str = "ledger <new <name>|load <path|name>|save [path|name]|show|list>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "ledger",
        "Create, load, save, or inspect the active ledger",
        USAGE,
        cmd_ledger,
    )]
}

fn cmd_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
    };
    let rest = &args[1..];
    match action.to_lowercase().as_str() {
        "new" => new_ledger(context, rest),
        "load" => load_ledger(context, rest),
        "save" => save_ledger(context, rest),
        "show" => show_ledger(context),
        "list" => list_ledgers(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown ledger action `{other}`; usage: {USAGE}"
        ))),
    }
}

/// Targets with a separator or a `.json` suffix are paths; anything else is a stored ledger name.
fn as_path(target: &str) -> Option<PathBuf> {
    let looks_like_path = target.contains('/')
        || target.contains('\\')
        || target.to_ascii_lowercase().ends_with(".json");
    looks_like_path.then(|| PathBuf::from(target))
}

fn new_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: ledger new <name>".into(),
        ));
    }
    if context.ledger.is_some() && context.can_prompt() {
        let discard = io::confirm_action(
            &context.theme,
            "Replace the current ledger? Unsaved changes are lost.",
            false,
        )?;
        if !discard {
            output::info("Operation cancelled.");
            return Ok(());
        }
    }

    context.replace_ledger(Ledger::new(name), None);
    output::success(format!("New ledger `{}` created.", name));
    Ok(())
}

fn load_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args.join(" ");
    let target = target.trim();
    if target.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: ledger load <path|name>".into(),
        ));
    }

    let (ledger, path) = match as_path(target) {
        Some(path) => (context.storage.load_ledger_from_path(&path)?, path),
        None => {
            let ledger = context.storage.load_ledger(target)?;
            context.update_last_opened(Some(target))?;
            (ledger, context.storage.ledger_path(target))
        }
    };

    let message = format!(
        "Ledger `{}` loaded ({} transactions, {} holdings).",
        ledger.name,
        ledger.transactions.len(),
        ledger.holdings.len()
    );
    context.replace_ledger(ledger, Some(path));
    output::success(message);
    Ok(())
}

fn save_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args.join(" ");
    let target = target.trim();

    let destination = if !target.is_empty() {
        match as_path(target) {
            Some(path) => Destination::Path(path),
            None => Destination::Named(target.to_string()),
        }
    } else if let Some(path) = context.ledger_path.clone() {
        Destination::Path(path)
    } else {
        Destination::Named(context.ledger()?.name.clone())
    };

    let path = match destination {
        Destination::Path(path) => {
            write_to_path(context, &path)?;
            path
        }
        Destination::Named(name) => {
            context.storage.save_ledger(&name, context.ledger()?)?;
            context.update_last_opened(Some(&name))?;
            context.storage.ledger_path(&name)
        }
    };

    output::success(format!("Ledger saved to {}.", path.display()));
    context.ledger_path = Some(path);
    Ok(())
}

enum Destination {
    Path(PathBuf),
    Named(String),
}

fn write_to_path(context: &ShellContext, path: &Path) -> CommandResult {
    context
        .storage
        .save_ledger_to_path(context.ledger()?, path)?;
    Ok(())
}

fn show_ledger(context: &mut ShellContext) -> CommandResult {
    let ledger = context.ledger()?;
    let fmt = &context.formatters;
    let balance = SummaryService::current_balance(&ledger.transactions);
    let holdings = ledger.holdings_value();

    section(format!("Ledger: {}", ledger.name));
    if let Some(path) = &context.ledger_path {
        detail(format!("  File          : {}", path.display()));
    }
    detail(format!("  Transactions  : {}", ledger.transactions.len()));
    detail(format!(
        "  Planned       : {}",
        ledger.transactions.iter().filter(|txn| txn.is_future).count()
    ));
    detail(format!("  Holdings      : {}", ledger.holdings.len()));
    detail(format!("  Balance       : {}", fmt.amount(balance)));
    detail(format!("  Holdings value: {}", fmt.amount(holdings)));
    detail(format!(
        "  Total assets  : {}",
        fmt.amount(SummaryService::total_assets(&ledger.transactions, holdings))
    ));
    detail(format!(
        "  Updated       : {}",
        ledger.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    context.report_warnings(ledger);
    Ok(())
}

fn list_ledgers(context: &mut ShellContext) -> CommandResult {
    let names = context.storage.list_ledgers()?;
    if names.is_empty() {
        output::info(format!(
            "No saved ledgers in {}.",
            context.storage.ledgers_dir().display()
        ));
        return Ok(());
    }
    section("Saved ledgers");
    for name in names {
        detail(format!("  {}", name));
    }
    Ok(())
}
