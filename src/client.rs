//! High-level client — `FinanceClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This module
//! keeps the builder and accessor methods.

use crate::domain::crypto::client::Cryptos;
use crate::domain::currency::client::Currencies;
use crate::domain::stock::client::Stocks;
use crate::domain::topic::client::Topics;
use crate::error::ClientError;
use crate::http::FinanceHttp;
use crate::network;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::crypto::client::Cryptos as CryptosClient;
pub use crate::domain::currency::client::Currencies as CurrenciesClient;
pub use crate::domain::stock::client::Stocks as StocksClient;
pub use crate::domain::topic::client::Topics as TopicsClient;

/// The primary entry point for the FinanceHub SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.topics()`, `client.stocks()`, etc. Cheap to clone; no shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct FinanceClient {
    pub(crate) http: FinanceHttp,
}

impl FinanceClient {
    pub fn builder() -> FinanceClientBuilder {
        FinanceClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn topics(&self) -> Topics<'_> {
        Topics { client: self }
    }

    pub fn stocks(&self) -> Stocks<'_> {
        Stocks { client: self }
    }

    pub fn cryptos(&self) -> Cryptos<'_> {
        Cryptos { client: self }
    }

    pub fn currencies(&self) -> Currencies<'_> {
        Currencies { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FinanceClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for FinanceClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            timeout: network::REQUEST_TIMEOUT,
        }
    }
}

impl FinanceClientBuilder {
    /// Override the backend host. The `/api` path prefix is appended per
    /// request.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Override the fixed request timeout (defaults to 10 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<FinanceClient, ClientError> {
        Ok(FinanceClient {
            http: FinanceHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
