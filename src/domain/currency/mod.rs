//! Currency domain — exchange-rate lookups.
//!
//! No page consumes this in the current scope; it is part of the client
//! contract.

pub mod client;

use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: f64,
    pub bid: f64,
    pub ask: f64,
    pub last_updated: String,
}
