use cashflow_domain::CURRENT_SCHEMA_VERSION;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output::{detail, section};
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    section(format!("Cashflow Tracker {}", meta.version));
    detail(format!("  CLI version  : {}", build_info::CLI_VERSION));
    detail(format!("  Ledger schema: v{}", CURRENT_SCHEMA_VERSION));
    detail(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    detail(format!("  Built at     : {}", meta.timestamp));
    detail(format!("  Target       : {}", meta.target));
    detail(format!("  Profile      : {}", meta.profile));
    detail(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        match context.registry.get(&raw.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(raw),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
