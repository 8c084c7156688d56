use std::path::PathBuf;

use cashflow_config::{Config, ConfigManager};
use cashflow_core::Clock;
use cashflow_domain::Ledger;
use cashflow_storage_json::JsonLedgerStorage;
use dialoguer::theme::ColorfulTheme;

use super::{formatters::CliFormatters, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Mutable state shared by every command handler during a shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub base_dir: PathBuf,
    pub storage: JsonLedgerStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub formatters: CliFormatters,
    pub clock: Box<dyn Clock>,
    pub ledger: Option<Ledger>,
    pub ledger_path: Option<PathBuf>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn ledger_name(&self) -> Option<&str> {
        self.ledger.as_ref().map(|ledger| ledger.name.as_str())
    }

    pub fn prompt(&self) -> String {
        match self.ledger_name() {
            Some(name) => format!("cashflow [{}]> ", name),
            None => "cashflow> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
