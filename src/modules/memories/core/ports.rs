// Ports define what the memories use cases need from storage, without implementing it.
//
// Each method is one atomic operation on the store: implementations must not
// let two calls interleave their effects.

use crate::modules::memories::core::entry::{Entry, NewEntry};
use async_trait::async_trait;

#[async_trait]
pub trait MemoryRepository: Send + Sync {
    async fn insert(&self, new_entry: NewEntry) -> anyhow::Result<Entry>;
    async fn latest(&self, limit: usize) -> anyhow::Result<Vec<Entry>>;
    async fn search(&self, term: &str, limit: usize) -> anyhow::Result<Vec<Entry>>;
    async fn remove(&self, id: i64) -> anyhow::Result<usize>;
}
