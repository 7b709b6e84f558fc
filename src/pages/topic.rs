//! Topic detail page view-model.

use crate::client::FinanceClient;
use crate::domain::topic::FinanceTopic;
use crate::resource::Resource;

const FETCH_FALLBACK: &str = "Failed to fetch topic";

/// View-model for one topic detail page, keyed by topic id.
#[derive(Debug, Clone)]
pub struct TopicView {
    topic_id: String,
    topic: Resource<FinanceTopic>,
}

impl TopicView {
    pub fn new(topic_id: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            topic: Resource::new(),
        }
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    pub fn topic(&self) -> &Resource<FinanceTopic> {
        &self.topic
    }

    /// Re-key the page to another topic. The caller follows up with `load`,
    /// as on a route change.
    pub fn set_topic_id(&mut self, topic_id: impl Into<String>) {
        self.topic_id = topic_id.into();
    }

    /// Fetch the topic and settle the resource.
    pub async fn load(&mut self, client: &FinanceClient) {
        let ticket = self.topic.begin();
        let result = client.topics().get(&self.topic_id).await;
        self.topic.complete(ticket, result, FETCH_FALLBACK);
    }
}
