//! Cryptos sub-client.

use crate::client::FinanceClient;
use crate::domain::crypto::CryptoPrice;
use crate::error::ClientError;

/// Sub-client for cryptocurrency operations.
pub struct Cryptos<'a> {
    pub(crate) client: &'a FinanceClient,
}

impl<'a> Cryptos<'a> {
    /// Top cryptocurrencies by market cap, server order. Empty when the
    /// envelope has no data.
    pub async fn top(&self) -> Result<Vec<CryptoPrice>, ClientError> {
        self.client.http.get_top_cryptos().await
    }

    /// A single cryptocurrency by id. Fails with `NotFound` when the envelope
    /// has no data.
    pub async fn get(&self, id: &str) -> Result<CryptoPrice, ClientError> {
        self.client.http.get_crypto_price(id).await
    }
}
