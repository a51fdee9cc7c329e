// Shared test fixture for accepted memories that still need an id.

use crate::modules::memories::core::entry::NewEntry;
use chrono::{TimeZone, Utc};

pub const FIXED_CREATED_AT_MILLIS: i64 = 1_700_000_000_000;

pub struct NewEntryBuilder {
    inner: NewEntry,
}

impl Default for NewEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewEntry {
                content: "This is a test memory".to_string(),
                created_at: Utc.timestamp_millis_opt(FIXED_CREATED_AT_MILLIS).unwrap(),
            },
        }
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = v.into();
        self
    }

    pub fn at_millis(mut self, v: i64) -> Self {
        self.inner.created_at = Utc.timestamp_millis_opt(v).unwrap();
        self
    }

    pub fn build(self) -> NewEntry {
        self.inner
    }
}
