use cashflow_config::Config;
use cashflow_core::{CurrencyFormatter, DateFormatter};
use chrono::NaiveDate;

const DEFAULT_PRECISION: usize = 2;

/// Formatter implementations driven by the active CLI configuration.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency: String,
    precision: usize,
}

impl CliFormatters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency: config.currency.clone(),
            precision: config
                .currency_precision
                .map(usize::from)
                .unwrap_or(DEFAULT_PRECISION),
        }
    }

    /// Formats in the configured currency.
    pub fn amount(&self, amount: f64) -> String {
        self.format_amount(amount, "")
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = if currency.is_empty() {
            self.currency.as_str()
        } else {
            currency
        };
        format!(
            "{amount:.prec$} {code}",
            amount = amount,
            prec = self.precision,
            code = code
        )
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_follow_configured_currency_and_precision() {
        let mut config = Config::default();
        let formatters = CliFormatters::from_config(&config);
        assert_eq!(formatters.amount(1234.5), "1234.50 USD");
        assert_eq!(formatters.format_amount(-3.0, "EUR"), "-3.00 EUR");

        config.currency = "JPY".into();
        config.currency_precision = Some(0);
        let formatters = CliFormatters::from_config(&config);
        assert_eq!(formatters.amount(10_036.0), "10036 JPY");
    }
}
