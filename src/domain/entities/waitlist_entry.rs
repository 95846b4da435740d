use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single recorded signup. Created once per unique email and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Result of asking the store to record an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(WaitlistEntry),
    /// The unique constraint on `email` rejected the row.
    AlreadyExists,
}
