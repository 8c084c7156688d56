use std::path::{Path, PathBuf};

use cashflow_core::{
    ProjectionSettings, DEFAULT_HORIZON_MONTHS, HORIZON_CEILING_MONTHS, MAX_HORIZON_MONTHS,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "locale",
    "currency",
    "currency_precision",
    "default_horizon_months",
    "max_horizon_months",
    "rng_seed",
    "default_ledger_root",
];

/// Stores user-configurable preferences and projection defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub currency_precision: Option<u8>,
    #[serde(default = "Config::default_horizon_value")]
    pub default_horizon_months: u32,
    #[serde(default = "Config::max_horizon_value")]
    pub max_horizon_months: u32,
    /// Fixed seed for reproducible projections; entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for named ledgers.
    pub default_ledger_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_ledger: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_precision: None,
            default_horizon_months: Self::default_horizon_value(),
            max_horizon_months: Self::max_horizon_value(),
            rng_seed: None,
            default_ledger_root: None,
            last_opened_ledger: None,
        }
    }
}

impl Config {
    pub fn default_horizon_value() -> u32 {
        DEFAULT_HORIZON_MONTHS
    }

    pub fn max_horizon_value() -> u32 {
        MAX_HORIZON_MONTHS
    }

    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings {
            default_horizon_months: self.default_horizon_months,
            max_horizon_months: self.max_horizon_months,
        }
    }

    /// Directory for named ledgers: the configured root, else `<base>/ledgers`.
    pub fn resolve_default_ledger_root(&self, base: &Path) -> PathBuf {
        match &self.default_ledger_root {
            Some(path) => path.clone(),
            None => base.join("ledgers"),
        }
    }

    /// Updates one field from its textual form. `none` clears optional fields.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let clears = value.eq_ignore_ascii_case("none");
        match key {
            "locale" => self.locale = value.to_string(),
            "currency" => self.currency = value.to_ascii_uppercase(),
            "currency_precision" => {
                self.currency_precision = if clears {
                    None
                } else {
                    Some(parse_value(key, value)?)
                }
            }
            "default_horizon_months" => {
                let months: u32 = parse_value(key, value)?;
                if months == 0 || months > self.max_horizon_months {
                    return Err(invalid(
                        key,
                        format!("must be between 1 and {}", self.max_horizon_months),
                    ));
                }
                self.default_horizon_months = months;
            }
            "max_horizon_months" => {
                let months: u32 = parse_value(key, value)?;
                if months > HORIZON_CEILING_MONTHS {
                    return Err(invalid(
                        key,
                        format!("must not exceed {} months", HORIZON_CEILING_MONTHS),
                    ));
                }
                if months < self.default_horizon_months {
                    return Err(invalid(
                        key,
                        format!(
                            "must not be below the default horizon of {}",
                            self.default_horizon_months
                        ),
                    ));
                }
                self.max_horizon_months = months;
            }
            "rng_seed" => {
                self.rng_seed = if clears {
                    None
                } else {
                    Some(parse_value(key, value)?)
                }
            }
            "default_ledger_root" => {
                self.default_ledger_root = if clears {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err: T::Err| invalid(key, err.to_string()))
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_parses_numeric_fields() {
        let mut config = Config::default();
        config.set("default_horizon_months", "24").unwrap();
        config.set("rng_seed", "99").unwrap();
        assert_eq!(config.default_horizon_months, 24);
        assert_eq!(config.rng_seed, Some(99));
        config.set("rng_seed", "none").unwrap();
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn set_rejects_out_of_range_horizons() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("default_horizon_months", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("max_horizon_months", "6"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("theme", "dark"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_caps_above_the_ceiling() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("max_horizon_months", "4000000000"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("max_horizon_months", "1201"),
            Err(ConfigError::InvalidValue { .. })
        ));
        config.set("max_horizon_months", "1200").unwrap();
        assert_eq!(config.max_horizon_months, 1200);
    }

    #[test]
    fn ledger_root_defaults_under_base() {
        let mut config = Config::default();
        let base = Path::new("/tmp/cashflow-home");
        assert_eq!(config.resolve_default_ledger_root(base), base.join("ledgers"));
        config.set("default_ledger_root", "/srv/ledgers").unwrap();
        assert_eq!(
            config.resolve_default_ledger_root(base),
            PathBuf::from("/srv/ledgers")
        );
    }

    #[test]
    fn projection_settings_follow_config() {
        let mut config = Config::default();
        config.set("max_horizon_months", "120").unwrap();
        let settings = config.projection_settings();
        assert_eq!(settings.default_horizon_months, 12);
        assert_eq!(settings.max_horizon_months, 120);
    }
}
