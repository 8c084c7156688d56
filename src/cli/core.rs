//! Core CLI dispatch, error plumbing, and shell context helpers.

use std::{env, io, path::PathBuf};

use cashflow_config::{app_data_dir, ConfigError, ConfigManager};
use cashflow_core::{
    storage::{ledger_warnings, LedgerStorage},
    Clock, CoreError, FixedClock,
};
use cashflow_domain::Ledger;
use cashflow_storage_json::JsonLedgerStorage;
use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tracing::debug;
use uuid::Uuid;

pub use crate::errors::{AppError, CliError};

use super::commands;
use super::formatters::CliFormatters;
use super::io as cli_io;
use super::output;
use super::registry::CommandRegistry;
use super::shell::parse_command_line;
pub use super::shell_context::{CliMode, ShellContext};
use super::system_clock::SystemClock;

/// Pins the shell's notion of "today" (YYYY-MM-DD) for reproducible runs.
pub const TODAY_ENV: &str = "CASHFLOW_CLI_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, app_data_dir(), clock_from_env()?)
    }

    /// Builds a context whose config and named ledgers live under `base_dir`.
    pub fn with_base_dir(
        mode: CliMode,
        base_dir: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load()?;
        let storage = JsonLedgerStorage::new(config.resolve_default_ledger_root(&base_dir))?;
        let formatters = CliFormatters::from_config(&config);
        debug!(base = %base_dir.display(), ?mode, "shell context ready");

        let mut app = ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            base_dir,
            storage,
            config_manager,
            config,
            formatters,
            clock,
            ledger: None,
            ledger_path: None,
            last_command: None,
            running: true,
        };

        app.auto_load_last();
        Ok(app)
    }

    fn auto_load_last(&mut self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        let Some(name) = self.config.last_opened_ledger.clone() else {
            return;
        };
        match self.storage.load_ledger(&name) {
            Ok(ledger) => {
                let path = self.storage.ledger_path(&name);
                self.replace_ledger(ledger, Some(path));
                output::success(format!("Automatically loaded last ledger `{}`.", name));
            }
            Err(err) => debug!(%name, %err, "last opened ledger not restored"),
        }
    }

    pub(crate) fn ledger(&self) -> Result<&Ledger, CommandError> {
        self.ledger.as_ref().ok_or(CommandError::LedgerNotLoaded)
    }

    pub(crate) fn ledger_mut(&mut self) -> Result<&mut Ledger, CommandError> {
        self.ledger.as_mut().ok_or(CommandError::LedgerNotLoaded)
    }

    pub(crate) fn replace_ledger(&mut self, ledger: Ledger, path: Option<PathBuf>) {
        self.report_warnings(&ledger);
        self.ledger = Some(ledger);
        self.ledger_path = path;
    }

    pub(crate) fn report_warnings(&self, ledger: &Ledger) {
        for warning in ledger_warnings(ledger) {
            output::warning(warning);
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn update_last_opened(&mut self, name: Option<&str>) -> CommandResult {
        self.config.last_opened_ledger = name.map(str::to_string);
        self.persist_config()
    }

    /// Re-derives formatters and the ledger directory after a config change.
    pub(crate) fn apply_config(&mut self) -> CommandResult {
        self.formatters = CliFormatters::from_config(&self.config);
        let root = self.config.resolve_default_ledger_root(&self.base_dir);
        if root.as_path() != self.storage.ledgers_dir() {
            self.storage = JsonLedgerStorage::new(root)?;
        }
        Ok(())
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());
        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if !self.can_prompt() {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::LedgerNotLoaded => {
                output::error(CommandError::LedgerNotLoaded);
                output::hint("Try `ledger new Household` to get started.");
            }
            other => output::error(other),
        }
    }
}

fn clock_from_env() -> Result<Box<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                CliError::Input(format!("{} must be YYYY-MM-DD, got `{}`", TODAY_ENV, raw))
            })?;
            Ok(Box::new(FixedClock::on(date)))
        }
        Err(_) => Ok(Box::new(SystemClock)),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

/// Parses a non-negative, finite amount.
pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let value: f64 = input
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CommandError::InvalidArguments(format!(
            "amount must be a non-negative number, got `{}`",
            input
        )));
    }
    Ok(value)
}

/// Splits `--flag` tokens from positional arguments.
pub(crate) fn split_flags<'a>(args: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    args.iter().copied().partition(|arg| !arg.starts_with("--"))
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Ledger not loaded. Use `ledger new` or `ledger load` first.")]
    LedgerNotLoaded,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] AppError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(AppError::from(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(AppError::from(err))
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base: &std::path::Path,
    today: NaiveDate,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_base_dir(
        CliMode::Script,
        base.to_path_buf(),
        Box::new(FixedClock::on(today)),
    )?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(app)
}
