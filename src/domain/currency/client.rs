//! Currencies sub-client.

use crate::client::FinanceClient;
use crate::domain::currency::CurrencyRate;
use crate::error::ClientError;

/// Sub-client for currency operations.
pub struct Currencies<'a> {
    pub(crate) client: &'a FinanceClient,
}

impl<'a> Currencies<'a> {
    /// Exchange rate from one currency to another. Fails with `NotFound` when
    /// the envelope has no data.
    pub async fn rate(&self, from: &str, to: &str) -> Result<CurrencyRate, ClientError> {
        self.client.http.get_currency_rate(from, to).await
    }
}
