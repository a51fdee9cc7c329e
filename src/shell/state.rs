use crate::modules::memories::adapters::outbound::memories_in_memory::InMemoryMemories;
use crate::modules::memories::core::ports::MemoryRepository;
use crate::modules::memories::use_cases::create_memory::handler::CreateMemoryHandler;
use crate::modules::memories::use_cases::delete_memory::handler::DeleteMemoryHandler;
use crate::modules::memories::use_cases::list_memories::handler::ListMemoriesHandler;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateMemoryHandler>,
    pub list_handler: Arc<ListMemoriesHandler>,
    pub delete_handler: Arc<DeleteMemoryHandler>,
}

impl AppState {
    pub fn new(repository: Arc<dyn MemoryRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateMemoryHandler::new(repository.clone())),
            list_handler: Arc::new(ListMemoriesHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteMemoryHandler::new(repository)),
        }
    }

    /// State over a fresh in-memory store seeded at `started_at`.
    pub fn in_memory(started_at: DateTime<Utc>) -> Self {
        Self::new(Arc::new(InMemoryMemories::new(started_at)))
    }
}
