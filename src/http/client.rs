//! Low-level HTTP client — `FinanceHttp`.
//!
//! One method per API endpoint. Each method unwraps the response envelope into
//! a domain value: singular lookups fail with `NotFound` when `data` is absent,
//! collection lookups resolve to an empty `Vec`. No retries, no caching, no
//! auth headers.

use crate::domain::crypto::CryptoPrice;
use crate::domain::currency::CurrencyRate;
use crate::domain::stock::{StockQuote, TimeSeriesPoint};
use crate::domain::topic::FinanceTopic;
use crate::error::ClientError;
use crate::http::envelope::Envelope;
use crate::shared::Symbol;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the FinanceHub REST API.
#[derive(Debug, Clone)]
pub struct FinanceHttp {
    base_url: String,
    client: Client,
}

impl FinanceHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::from)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    // ── Topics ───────────────────────────────────────────────────────────

    pub async fn get_all_topics(&self) -> Result<Vec<FinanceTopic>, ClientError> {
        let url = format!("{}/api/topics", self.base_url);
        let env: Envelope<Vec<FinanceTopic>> = self.get(&url).await?;
        Ok(env.data_or_empty())
    }

    pub async fn get_topic_by_id(&self, id: &str) -> Result<FinanceTopic, ClientError> {
        let url = format!("{}/api/topics/{}", self.base_url, urlencoding::encode(id));
        let env: Envelope<FinanceTopic> = self.get(&url).await?;
        env.require_data("Topic not found")
    }

    // ── Stocks ───────────────────────────────────────────────────────────

    pub async fn get_stock_quote(&self, symbol: &Symbol) -> Result<StockQuote, ClientError> {
        let url = format!(
            "{}/api/stocks/{}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        let env: Envelope<StockQuote> = self.get(&url).await?;
        env.require_data("Stock data not found")
    }

    /// Daily time series in the order the server returns it (newest first).
    /// Reordering for charting is the caller's concern.
    pub async fn get_stock_time_series(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<TimeSeriesPoint>, ClientError> {
        let url = format!(
            "{}/api/stocks/{}/timeseries",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        );
        let env: Envelope<Vec<TimeSeriesPoint>> = self.get(&url).await?;
        Ok(env.data_or_empty())
    }

    // ── Crypto ───────────────────────────────────────────────────────────

    /// Top cryptocurrencies, server order (`market_cap_rank` ascending). No
    /// client-side re-sorting.
    pub async fn get_top_cryptos(&self) -> Result<Vec<CryptoPrice>, ClientError> {
        let url = format!("{}/api/crypto/top", self.base_url);
        let env: Envelope<Vec<CryptoPrice>> = self.get(&url).await?;
        Ok(env.data_or_empty())
    }

    pub async fn get_crypto_price(&self, id: &str) -> Result<CryptoPrice, ClientError> {
        let url = format!("{}/api/crypto/{}", self.base_url, urlencoding::encode(id));
        let env: Envelope<CryptoPrice> = self.get(&url).await?;
        env.require_data("Crypto data not found")
    }

    // ── Currency ─────────────────────────────────────────────────────────

    pub async fn get_currency_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<CurrencyRate, ClientError> {
        let url = format!(
            "{}/api/currency/{}/{}",
            self.base_url,
            urlencoding::encode(from),
            urlencoding::encode(to)
        );
        let env: Envelope<CurrencyRate> = self.get(&url).await?;
        env.require_data("Currency rate not found")
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    /// Issue a GET and decode the envelope.
    ///
    /// The envelope is authoritative for payload presence: a 404 whose body is
    /// a well-formed envelope is returned as-is so the caller's `data` branch
    /// decides between `NotFound` and an empty collection. Other non-2xx
    /// statuses become `Server` errors carrying the envelope's `error` string
    /// when one is present.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>, ClientError> {
        tracing::debug!(%url, "GET");

        let resp = self.client.get(url).send().await.map_err(ClientError::from)?;
        let status = resp.status();
        let body = resp.text().await.map_err(ClientError::from)?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let status_code = status.as_u16();
        if let Ok(env) = serde_json::from_str::<Envelope<T>>(&body) {
            if status_code == 404 {
                return Ok(env);
            }
            let message = env
                .error_text()
                .map(str::to_string)
                .unwrap_or_else(|| body.clone());
            tracing::warn!(%url, status = status_code, %message, "server error");
            return Err(ClientError::Server {
                status: status_code,
                message,
            });
        }

        tracing::warn!(%url, status = status_code, "non-envelope error body");
        Err(ClientError::Server {
            status: status_code,
            message: body,
        })
    }
}
