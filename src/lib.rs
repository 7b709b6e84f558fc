//! # FinanceHub SDK
//!
//! A Rust client SDK for the FinanceHub educational finance API: typed access to
//! topics, stock quotes, daily time series, cryptocurrency listings, and currency
//! rates, plus the page view-state layer that mediates between the client and a
//! rendered UI.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, shared newtypes, error types
//! 2. **HTTP API** — `FinanceHttp` with the uniform response envelope
//! 3. **High-Level Client** — `FinanceClient` with nested sub-clients
//! 4. **View-State** — `Resource<T>` async-resource primitive and per-page
//!    view-models with the `Idle → Loading → {Ready, Failed}` lifecycle
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use financehub_sdk::prelude::*;
//!
//! let client = FinanceClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let topics = client.topics().all().await?;
//! let cryptos = client.cryptos().top().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and the request timeout budget.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client and response envelope.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FinanceClient` — the primary entry point.
pub mod client;

// ── Layer 4: View-State ──────────────────────────────────────────────────────

/// Reusable async-resource primitive: status, value, error, stale-response guard.
pub mod resource;

/// Per-page view-models: topic detail, stock markets, crypto listing.
pub mod pages;

/// Process-wide presentation state (light/dark color mode).
pub mod theme;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Symbol;

    // Domain types
    pub use crate::domain::crypto::CryptoPrice;
    pub use crate::domain::currency::CurrencyRate;
    pub use crate::domain::stock::{StockQuote, TimeSeriesPoint};
    pub use crate::domain::topic::FinanceTopic;

    // Errors
    pub use crate::error::ClientError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP envelope
    pub use crate::http::Envelope;

    // High-level client + sub-clients
    pub use crate::client::{
        CryptosClient, CurrenciesClient, FinanceClient, FinanceClientBuilder, StocksClient,
        TopicsClient,
    };

    // View-state
    pub use crate::pages::{CryptoListView, StockData, StockMarketsView, TopicView};
    pub use crate::resource::{Resource, Status, Ticket};
    pub use crate::theme::{ThemeContext, ThemeMode};
}
