//! Per-page view-models.
//!
//! Each data-bearing page composes a [`crate::resource::Resource`] with the
//! fetch routine that fills it. The embedding UI owns a view-model instance
//! per page, calls `load` on mount (and on search submission for the stock
//! page), and renders from the resource's status, value, and error.

mod crypto;
mod stocks;
mod topic;

pub use crypto::CryptoListView;
pub use stocks::{StockData, StockMarketsView};
pub use topic::TopicView;
