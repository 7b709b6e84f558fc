//! Crypto domain — ranked market listing.

pub mod client;

use serde::{Deserialize, Serialize};

/// One cryptocurrency in the top-N listing.
///
/// Listing order is defined by `market_cap_rank` ascending as provided by the
/// server; the client never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPrice {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub market_cap_rank: i64,
    #[serde(rename = "priceChange24h")]
    pub price_change_24h: f64,
    #[serde(rename = "priceChangePercent24h")]
    pub price_change_percent_24h: f64,
    #[serde(rename = "high24h")]
    pub high_24h: f64,
    #[serde(rename = "low24h")]
    pub low_24h: f64,
    pub circulating_supply: f64,
    pub last_updated: String,
}
