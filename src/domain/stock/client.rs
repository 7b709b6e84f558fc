//! Stocks sub-client — quote and time-series lookups.

use crate::client::FinanceClient;
use crate::domain::stock::{StockQuote, TimeSeriesPoint};
use crate::error::ClientError;
use crate::shared::Symbol;

/// Sub-client for stock operations.
pub struct Stocks<'a> {
    pub(crate) client: &'a FinanceClient,
}

impl<'a> Stocks<'a> {
    /// Quote for one symbol. Fails with `NotFound` when the envelope has no
    /// data.
    pub async fn quote(&self, symbol: &Symbol) -> Result<StockQuote, ClientError> {
        self.client.http.get_stock_quote(symbol).await
    }

    /// Daily series in server order (newest first). Empty when the envelope
    /// has no data.
    pub async fn time_series(&self, symbol: &Symbol) -> Result<Vec<TimeSeriesPoint>, ClientError> {
        self.client.http.get_stock_time_series(symbol).await
    }
}
