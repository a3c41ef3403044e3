use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single relayed message
///
/// Immutable once created. Owned by the recipient's queue from creation
/// until it is drained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message with a fresh id and the current timestamp
    pub fn new(from: impl Into<String>, to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: from.into(),
            to: to.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
