//! The uniform response envelope wrapping every backend payload.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Wire wrapper returned by every FinanceHub endpoint:
/// `{ success, data?, error?, message? }`.
///
/// The envelope, not the HTTP status, is the source of truth for payload
/// presence. A missing `data` field means "not found" for singular lookups and
/// "empty listing" for collection lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap a singular-entity payload, failing with `NotFound` and the given
    /// fixed message when `data` is absent.
    pub fn require_data(self, missing: &'static str) -> Result<T, ClientError> {
        self.data.ok_or(ClientError::NotFound(missing))
    }

    /// The envelope's own error text, preferring `error` over `message`.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

impl<T> Envelope<Vec<T>> {
    /// Unwrap a collection payload; absent `data` is an empty sequence, never
    /// an error.
    pub fn data_or_empty(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
