//! Network constants for the FinanceHub SDK.

use std::time::Duration;

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Fixed per-request timeout budget.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
