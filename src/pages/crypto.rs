//! Cryptocurrencies page view-model.

use crate::client::FinanceClient;
use crate::domain::crypto::CryptoPrice;
use crate::resource::Resource;

const FETCH_FALLBACK: &str = "Failed to fetch crypto data";

/// View-model for the top-cryptocurrencies listing page.
#[derive(Debug, Clone, Default)]
pub struct CryptoListView {
    cryptos: Resource<Vec<CryptoPrice>>,
}

impl CryptoListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cryptos(&self) -> &Resource<Vec<CryptoPrice>> {
        &self.cryptos
    }

    /// Fetch the listing and settle the resource. Order is the server's
    /// (`market_cap_rank` ascending).
    pub async fn load(&mut self, client: &FinanceClient) {
        let ticket = self.cryptos.begin();
        let result = client.cryptos().top().await;
        self.cryptos.complete(ticket, result, FETCH_FALLBACK);
    }
}
