use chrono::Utc;

use super::StoreError;

/// A record that can live in a [`Collection`].
pub trait Entity {
    fn id(&self) -> &str;
}

/// An in-memory, insertion-ordered collection of records.
///
/// Insertion order is display order; callers sort a copy when they need a
/// different ordering. All operations are synchronous and assume a single
/// logical actor per store instance.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a record, rejecting id collisions.
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Applies `edit` to the record with the given id.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> Result<(), StoreError> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                edit(record);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Allocates a fresh time-based id, unique within this collection.
    ///
    /// Millisecond timestamp with the given prefix; bumped until free, so two
    /// allocations in the same millisecond still yield distinct ids.
    pub fn allocate_id(&self, prefix: &str) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let candidate = format!("{prefix}{stamp}");
            if !self.contains(&candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }
}
