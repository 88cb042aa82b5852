//! Keyword-matched chat replies.

mod responder;
mod topic;
mod typing;

pub use responder::{Reply, Responder};
pub use topic::{Topic, TopicTable};
pub use typing::{TypingDelay, DEFAULT_MAX_MS, DEFAULT_MIN_MS};
