// Ordered, size-capped collection of memories.
//
// Purpose
// - Hold every entry newest-first and answer list, search and delete against it.
//
// Boundaries
// - Pure data structure. No locking and no clock; callers supply timestamps
//   and serialize access.

use crate::modules::memories::core::entry::{Entry, NewEntry};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

pub const CAPACITY: usize = 500;
pub const SEED_ID: i64 = 1;
pub const SEED_CONTENT: &str = "system initialized";

#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: VecDeque<Entry>,
    capacity: usize,
    last_issued_id: i64,
}

impl MemoryStore {
    /// A store holding only the seed entry, dated `started_at`.
    pub fn seeded(started_at: DateTime<Utc>) -> Self {
        let mut entries = VecDeque::with_capacity(CAPACITY + 1);
        entries.push_front(Entry {
            id: SEED_ID,
            created_at: started_at,
            content: SEED_CONTENT.to_string(),
        });
        Self {
            entries,
            capacity: CAPACITY,
            last_issued_id: SEED_ID,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `new_entry` as the newest memory and returns it with its id.
    ///
    /// The id is the creation time in milliseconds. When the clock has not
    /// moved past the last issued id, the id is bumped to `last + 1` so ids
    /// stay unique and strictly increasing. At most one entry is evicted
    /// from the back when the store grows past its capacity.
    pub fn insert(&mut self, new_entry: NewEntry) -> Entry {
        let id = new_entry
            .created_at
            .timestamp_millis()
            .max(self.last_issued_id.saturating_add(1));
        self.last_issued_id = id;

        let entry = Entry {
            id,
            created_at: new_entry.created_at,
            content: new_entry.content,
        };
        self.entries.push_front(entry.clone());
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        entry
    }

    /// The newest `limit` entries, newest first.
    pub fn latest(&self, limit: usize) -> Vec<Entry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// The newest `limit` entries whose content contains `term`, ignoring case.
    pub fn search(&self, term: &str, limit: usize) -> Vec<Entry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.content.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Removes every entry with `id` and returns how many were removed.
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before - self.entries.len()
    }
}

#[cfg(test)]
mod memory_store_tests {
    use super::*;
    use crate::tests::fixtures::new_entry::NewEntryBuilder;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> MemoryStore {
        MemoryStore::seeded(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }

    fn contents(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.content.as_str()).collect()
    }

    #[rstest]
    fn it_should_start_with_only_the_seed_entry(before_each: MemoryStore) {
        let store = before_each;
        assert_eq!(store.len(), 1);
        let seed = &store.latest(1)[0];
        assert_eq!(seed.id, SEED_ID);
        assert_eq!(seed.content, SEED_CONTENT);
    }

    #[rstest]
    fn it_should_put_a_new_entry_in_front(before_each: MemoryStore) {
        let mut store = before_each;
        let created = store.insert(NewEntryBuilder::new().content("hello").build());

        let listed = store.latest(20);
        assert_eq!(listed[0], created);
        assert_eq!(contents(&listed), vec!["hello", SEED_CONTENT]);
    }

    #[rstest]
    fn it_should_derive_the_id_from_the_creation_millis(before_each: MemoryStore) {
        let mut store = before_each;
        let created = store.insert(NewEntryBuilder::new().at_millis(1_700_000_123_456).build());
        assert_eq!(created.id, 1_700_000_123_456);
    }

    #[rstest]
    fn it_should_keep_ids_unique_within_the_same_millisecond(before_each: MemoryStore) {
        let mut store = before_each;
        let first = store.insert(NewEntryBuilder::new().at_millis(1_700_000_000_500).build());
        let second = store.insert(NewEntryBuilder::new().at_millis(1_700_000_000_500).build());
        let third = store.insert(NewEntryBuilder::new().at_millis(1_700_000_000_499).build());

        assert_eq!(first.id, 1_700_000_000_500);
        assert_eq!(second.id, 1_700_000_000_501);
        assert_eq!(third.id, 1_700_000_000_502);
    }

    #[rstest]
    fn it_should_evict_the_oldest_entry_past_capacity(before_each: MemoryStore) {
        let mut store = before_each;
        for n in 0..CAPACITY {
            store.insert(NewEntryBuilder::new().content(format!("memory {n}")).build());
        }

        assert_eq!(store.len(), CAPACITY);
        let all = store.latest(CAPACITY);
        assert!(all.iter().all(|e| e.id != SEED_ID));
        assert_eq!(store.latest(1)[0].content, format!("memory {}", CAPACITY - 1));
        assert_eq!(all.last().unwrap().content, "memory 0");
    }

    #[rstest]
    fn it_should_list_at_most_the_requested_number(before_each: MemoryStore) {
        let mut store = before_each;
        for n in 0..30 {
            store.insert(NewEntryBuilder::new().content(format!("memory {n}")).build());
        }

        let listed = store.latest(20);
        assert_eq!(listed.len(), 20);
        assert_eq!(listed[0].content, "memory 29");
        assert_eq!(listed[19].content, "memory 10");
    }

    #[rstest]
    fn it_should_search_case_insensitively(before_each: MemoryStore) {
        let mut store = before_each;
        store.insert(NewEntryBuilder::new().content("Neural System").build());

        assert_eq!(contents(&store.search("neural", 5)), vec!["Neural System"]);
        assert_eq!(contents(&store.search("SYSTEM", 5)), vec!["Neural System"]);
    }

    #[rstest]
    fn it_should_return_newest_matches_first_and_cap_them(before_each: MemoryStore) {
        let mut store = before_each;
        for n in 0..8 {
            store.insert(NewEntryBuilder::new().content(format!("note {n}")).build());
        }
        store.insert(NewEntryBuilder::new().content("unrelated").build());

        let found = store.search("note", 5);
        assert_eq!(
            contents(&found),
            vec!["note 7", "note 6", "note 5", "note 4", "note 3"]
        );
    }

    #[rstest]
    fn it_should_return_nothing_when_no_entry_matches(before_each: MemoryStore) {
        let store = before_each;
        assert!(store.search("banana", 5).is_empty());
    }

    #[rstest]
    fn it_should_remove_exactly_the_matching_entry(before_each: MemoryStore) {
        let mut store = before_each;
        let keep = store.insert(NewEntryBuilder::new().content("keep").build());
        let drop = store.insert(NewEntryBuilder::new().content("drop").build());

        assert_eq!(store.remove(drop.id), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.latest(1)[0], keep);
        assert_eq!(contents(&store.latest(20)), vec!["keep", SEED_CONTENT]);
    }

    #[rstest]
    fn it_should_leave_the_store_unchanged_for_an_unknown_id(before_each: MemoryStore) {
        let mut store = before_each;
        store.insert(NewEntryBuilder::new().build());
        let before = store.latest(CAPACITY);

        assert_eq!(store.remove(42), 0);
        assert_eq!(store.latest(CAPACITY), before);
    }
}
