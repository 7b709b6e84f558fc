//! Stock domain — point-in-time quote plus daily time series.

pub mod client;

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot for one symbol. No history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
    pub last_updated: String,
}

/// One daily price/volume observation.
///
/// The backend returns series newest-first; [`crate::pages::StockMarketsView`]
/// reverses to chronological order before charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}
