// In memory memory repository.
//
// Purpose
// - Back the service with a single process-wide store that lives as long as the process.
//
// Responsibilities
// - Serialize every operation through one lock so each one is atomic.
// - Offer an offline switch so callers can exercise the failure path.

use crate::modules::memories::core::entry::{Entry, NewEntry};
use crate::modules::memories::core::ports::MemoryRepository;
use crate::modules::memories::core::store::MemoryStore;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

pub struct InMemoryMemories {
    store: RwLock<MemoryStore>,
    is_offline: bool,
}

impl InMemoryMemories {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            store: RwLock::new(MemoryStore::seeded(started_at)),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Memory repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MemoryRepository for InMemoryMemories {
    async fn insert(&self, new_entry: NewEntry) -> anyhow::Result<Entry> {
        self.ensure_online()?;
        Ok(self.store.write().await.insert(new_entry))
    }

    async fn latest(&self, limit: usize) -> anyhow::Result<Vec<Entry>> {
        self.ensure_online()?;
        Ok(self.store.read().await.latest(limit))
    }

    async fn search(&self, term: &str, limit: usize) -> anyhow::Result<Vec<Entry>> {
        self.ensure_online()?;
        Ok(self.store.read().await.search(term, limit))
    }

    async fn remove(&self, id: i64) -> anyhow::Result<usize> {
        self.ensure_online()?;
        Ok(self.store.write().await.remove(id))
    }
}
