use crate::modules::memories::core::ports::MemoryRepository;
use std::sync::Arc;

pub struct DeleteMemoryHandler {
    repository: Arc<dyn MemoryRepository>,
}

impl DeleteMemoryHandler {
    pub fn new(repository: Arc<dyn MemoryRepository>) -> Self {
        Self { repository }
    }

    /// Removes every memory with `id`. `None` (an unparseable id) matches nothing.
    pub async fn handle(&self, id: Option<i64>) -> anyhow::Result<usize> {
        let Some(id) = id else {
            return Ok(0);
        };
        let removed = self.repository.remove(id).await?;
        tracing::debug!(id, removed, "memory delete");
        Ok(removed)
    }
}

/// Reads the leading integer of a path segment, ignoring whatever follows it
/// (`"12abc"` and `"12.5"` both give 12). `None` when there are no leading digits.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
