use crate::modules::memories::core::entry::Entry;
use crate::modules::memories::core::ports::MemoryRepository;
use crate::modules::memories::use_cases::list_memories::query::ListMemories;
use std::sync::Arc;

pub const LIST_LIMIT: usize = 20;
pub const SEARCH_LIMIT: usize = 5;

pub struct ListMemoriesHandler {
    repository: Arc<dyn MemoryRepository>,
}

impl ListMemoriesHandler {
    pub fn new(repository: Arc<dyn MemoryRepository>) -> Self {
        Self { repository }
    }

    /// Newest entries first: up to five matches when searching, otherwise up to twenty.
    pub async fn handle(&self, query: ListMemories) -> anyhow::Result<Vec<Entry>> {
        match query.term() {
            Some(term) => self.repository.search(term, SEARCH_LIMIT).await,
            None => self.repository.latest(LIST_LIMIT).await,
        }
    }
}
