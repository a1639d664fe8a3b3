//! Audit metadata and the acting user stamped into it.

use chrono::{DateTime, Utc};

/// Identity attributed to a write operation.
///
/// Every write operation receives an actor explicitly; there is no process-wide
/// default. Holds a non-blank username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(String);

impl Actor {
    /// Builds an actor from a raw username, trimming surrounding whitespace.
    ///
    /// # Returns
    /// - `Some(Actor)` - The username is non-blank
    /// - `None` - The username is empty or whitespace only
    pub fn new(username: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() {
            None
        } else {
            Some(Self(username.to_string()))
        }
    }

    pub fn username(&self) -> &str {
        &self.0
    }
}

/// Creation and last-modification stamps shared by every persisted row.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditMetadata {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}
