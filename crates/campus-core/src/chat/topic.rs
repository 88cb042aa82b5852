//! Ordered keyword topics and the fallback reply.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ValidationError};

const DEFAULT_TOPICS: &str = include_str!("../../assets/topics.toml");

/// A bundle of trigger keywords and one canned reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    /// Lowercase substrings; any one of them selects this topic.
    pub keywords: Vec<String>,
    pub response: String,
    /// Canned question offered as a quick reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Topic {
    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }

    /// Suggested question, falling back to the first keyword.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion
            .as_deref()
            .or_else(|| self.keywords.first().map(String::as_str))
    }
}

#[derive(Debug, Deserialize)]
struct TopicFile {
    fallback: String,
    #[serde(default)]
    topics: Vec<Topic>,
}

/// Topics in declaration order plus the reply used when none match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicTable {
    topics: Vec<Topic>,
    fallback: String,
}

impl TopicTable {
    /// Keywords are lowercased. Empty ids, empty keywords and duplicate ids
    /// are rejected.
    pub fn new(topics: Vec<Topic>, fallback: impl Into<String>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(topics.len());

        for mut topic in topics {
            if topic.id.trim().is_empty() {
                return Err(ValidationError::invalid("topic id", "must not be empty"));
            }
            if !seen.insert(topic.id.clone()) {
                return Err(ValidationError::Duplicate {
                    field: "topic id".into(),
                    value: topic.id,
                });
            }
            if topic.keywords.iter().any(|k| k.is_empty()) {
                return Err(ValidationError::invalid(
                    "keywords",
                    format!("topic '{}' has an empty keyword", topic.id),
                ));
            }
            topic.keywords = topic.keywords.iter().map(|k| k.to_lowercase()).collect();
            normalized.push(topic);
        }

        Ok(Self {
            topics: normalized,
            fallback: fallback.into(),
        })
    }

    /// The embedded campus topics: admission, courses, fees, exam, faculty,
    /// placement.
    pub fn default_campus() -> Self {
        Self::from_toml_str(DEFAULT_TOPICS).expect("embedded topic table must parse")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TopicFile = toml::from_str(content)?;
        let table = Self::new(file.topics, file.fallback)?;
        debug!(topics = table.len(), "loaded topic table");
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading topic table");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// One quick-reply question per topic, in declaration order.
    pub fn suggestions(&self) -> Vec<&str> {
        self.topics.iter().filter_map(Topic::suggestion).collect()
    }
}
