use chrono::{DateTime, Utc};

use crate::domain::common::{ListRecord, RecordDraft, RecordKey};

use super::ListError;

/// Ordered set of records with unique ids.
///
/// Ids for new records come from a monotonic sequence that starts past the highest
/// seeded id and never goes back, so an id freed by `remove` is not handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T: ListRecord> {
    items: Vec<T>,
    next_sequence: u64,
}

impl<T: ListRecord> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListRecord> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Build from seed data. Later duplicates of an id are dropped.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.upsert(record);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(|item| item.id().clone()).collect()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &T::Id) -> Result<&T, ListError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| ListError::not_found(id))
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Result<&mut T, ListError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ListError::not_found(id))
    }

    /// Sequence number the next `insert` will use.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Validate `draft`, assign the next id and append.
    pub fn insert(&mut self, draft: T::Draft, created_at: DateTime<Utc>) -> Result<&T, ListError> {
        draft.validate()?;

        let mut id = T::Id::from_sequence(self.next_sequence);
        self.next_sequence += 1;
        // Non-sequential ids (uuids) can in principle collide with seeded ones.
        while self.contains(&id) {
            id = T::Id::from_sequence(self.next_sequence);
            self.next_sequence += 1;
        }

        self.items.push(T::from_draft(id, draft, created_at));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Insert a record that already carries its id (seed data, server responses).
    /// Replaces a record with the same id in place.
    pub fn upsert(&mut self, record: T) {
        if let Some(seq) = record.id().sequence() {
            self.next_sequence = self.next_sequence.max(seq + 1);
        }
        match self.position(record.id()) {
            Some(pos) => self.items[pos] = record,
            None => self.items.push(record),
        }
    }

    pub fn update(&mut self, id: &T::Id, patch: &T::Patch) -> Result<&T, ListError> {
        T::check_patch(patch)?;
        let record = self.get_mut(id)?;
        record.apply_patch(patch);
        Ok(record)
    }

    pub fn remove(&mut self, id: &T::Id) -> Result<T, ListError> {
        let pos = self.position(id).ok_or_else(|| ListError::not_found(id))?;
        Ok(self.items.remove(pos))
    }

    /// Drop all records; the id sequence keeps its position.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.items.clear();
        for record in records {
            self.upsert(record);
        }
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
