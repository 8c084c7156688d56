use cashflow_config::CONFIG_KEYS;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, detail, section};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change persistent preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            context.apply_config()?;
            output::success(format!("`{}` set to `{}`.", key, value.trim()));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; usage: config [show|set <key> <value>]"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    let or_unset = |value: Option<String>| value.unwrap_or_else(|| "(unset)".to_string());

    section("Configuration");
    detail(format!("  File                  : {}", context.config_manager.config_path().display()));
    detail(format!("  locale                : {}", config.locale));
    detail(format!("  currency              : {}", config.currency));
    detail(format!(
        "  currency_precision    : {}",
        or_unset(config.currency_precision.map(|value| value.to_string()))
    ));
    detail(format!("  default_horizon_months: {}", config.default_horizon_months));
    detail(format!("  max_horizon_months    : {}", config.max_horizon_months));
    detail(format!(
        "  rng_seed              : {}",
        or_unset(config.rng_seed.map(|seed| seed.to_string()))
    ));
    detail(format!(
        "  default_ledger_root   : {}",
        context.storage.ledgers_dir().display()
    ));
    detail(format!(
        "  last_opened_ledger    : {}",
        or_unset(config.last_opened_ledger.clone())
    ));
}
