//! Topics sub-client.

use crate::client::FinanceClient;
use crate::domain::topic::FinanceTopic;
use crate::error::ClientError;

/// Sub-client for topic operations.
pub struct Topics<'a> {
    pub(crate) client: &'a FinanceClient,
}

impl<'a> Topics<'a> {
    /// All topics, server order. Empty when the envelope has no data.
    pub async fn all(&self) -> Result<Vec<FinanceTopic>, ClientError> {
        self.client.http.get_all_topics().await
    }

    /// A single topic by id. Fails with `NotFound` when the envelope has no
    /// data, regardless of HTTP status.
    pub async fn get(&self, id: &str) -> Result<FinanceTopic, ClientError> {
        self.client.http.get_topic_by_id(id).await
    }
}
