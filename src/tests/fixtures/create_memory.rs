// Shared test fixture for the CreateMemory command.

use crate::modules::memories::use_cases::create_memory::command::CreateMemory;
use crate::tests::fixtures::new_entry::FIXED_CREATED_AT_MILLIS;
use chrono::{TimeZone, Utc};

pub struct CreateMemoryBuilder {
    inner: CreateMemory,
}

impl Default for CreateMemoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateMemoryBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateMemory {
                content: Some("This is a test memory".to_string()),
                created_at: Utc.timestamp_millis_opt(FIXED_CREATED_AT_MILLIS).unwrap(),
            },
        }
    }

    pub fn content(mut self, v: impl Into<String>) -> Self {
        self.inner.content = Some(v.into());
        self
    }

    pub fn without_content(mut self) -> Self {
        self.inner.content = None;
        self
    }

    pub fn build(self) -> CreateMemory {
        self.inner
    }
}

#[cfg(test)]
mod create_memory_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_content() {
        let command = CreateMemoryBuilder::default().content("desc").build();
        assert_eq!(command.content.as_deref(), Some("desc"));
        assert_eq!(command.created_at.timestamp_millis(), FIXED_CREATED_AT_MILLIS);

        let command = CreateMemoryBuilder::new().without_content().build();
        assert!(command.content.is_none());
    }
}
