//! Topic domain — static educational finance content.

pub mod client;

use serde::{Deserialize, Serialize};

/// One of the finance subject pages, with server-provided descriptive content.
///
/// `keywords` and `resources` keep server order for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub resources: Vec<String>,
}
