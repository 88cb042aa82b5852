//! First-match-wins keyword responder.

use serde::Serialize;
use tracing::debug;

use super::{Topic, TopicTable};

/// Reply together with the topic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// `None` when the fallback answered.
    pub topic: Option<String>,
    pub response: String,
}

/// Answers free text from an ordered [`TopicTable`].
///
/// Matching is case-insensitive substring containment, so a keyword like
/// `job` also fires on `jobless`. Topics are tried in declaration order and
/// the first one with any matching keyword wins.
#[derive(Debug, Clone)]
pub struct Responder {
    table: TopicTable,
}

impl Responder {
    pub fn new(table: TopicTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TopicTable {
        &self.table
    }

    pub fn matched_topic(&self, text: &str) -> Option<&Topic> {
        let normalized = text.to_lowercase();
        self.table
            .topics()
            .iter()
            .find(|topic| topic.matches(&normalized))
    }

    pub fn respond(&self, text: &str) -> &str {
        match self.matched_topic(text) {
            Some(topic) => {
                debug!(topic = %topic.id, "matched topic");
                &topic.response
            }
            None => {
                debug!("no topic matched, using fallback");
                self.table.fallback()
            }
        }
    }

    pub fn reply(&self, text: &str) -> Reply {
        let topic = self.matched_topic(text);
        Reply {
            topic: topic.map(|t| t.id.clone()),
            response: self.respond(text).to_string(),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(TopicTable::default_campus())
    }
}
