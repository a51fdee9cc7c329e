use crate::modules::memories::core::entry::Entry;
use crate::modules::memories::core::ports::MemoryRepository;
use crate::modules::memories::use_cases::create_memory::command::CreateMemory;
use crate::modules::memories::use_cases::create_memory::decide::decide_create;
use crate::modules::memories::use_cases::create_memory::decision::{DecideError, Decision};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("repository: {0}")]
    Repository(#[from] anyhow::Error),
}

pub struct CreateMemoryHandler {
    repository: Arc<dyn MemoryRepository>,
}

impl CreateMemoryHandler {
    pub fn new(repository: Arc<dyn MemoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateMemory) -> Result<Entry, ApplicationError> {
        match decide_create(command) {
            Decision::Accepted { new_entry } => {
                let entry = self.repository.insert(new_entry).await?;
                tracing::info!(id = entry.id, "new memory saved: {}", entry.content);
                Ok(entry)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
