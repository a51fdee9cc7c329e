use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMemory {
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}
