use serde::{Deserialize, Serialize};

/// A free-text note. Notes are immutable once saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub created_at: i64,
}
