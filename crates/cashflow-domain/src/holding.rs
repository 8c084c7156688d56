//! Asset holdings and their valuation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A position in some investable asset, priced at its latest known value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetHolding {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker_symbol: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub purchase_price: f64,
    pub current_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
}

impl AssetHolding {
    pub fn new(name: impl Into<String>, quantity: f64, current_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ticker_symbol: None,
            quantity,
            purchase_price: current_price,
            current_price,
            asset_type: None,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker_symbol = Some(ticker.into());
        self
    }

    pub fn with_purchase_price(mut self, price: f64) -> Self {
        self.purchase_price = price;
        self
    }

    /// Market value at the current price.
    pub fn current_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn unrealized_gain(&self) -> f64 {
        (self.current_price - self.purchase_price) * self.quantity
    }
}

/// Sum of `quantity * current_price` across all holdings.
pub fn holdings_value(holdings: &[AssetHolding]) -> f64 {
    holdings.iter().map(AssetHolding::current_value).sum()
}
