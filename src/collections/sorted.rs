//! Key-sorted list with stable tie-breaking
//!
//! Entries are ordered by their string key; equal keys keep insertion
//! order, so the ordering is total.

/// A single entry of a [`SortedList`]
#[derive(Debug, Clone)]
pub struct SortedEntry<T> {
    pub key: String,
    pub value: T,
}

/// Bounded list kept sorted by key
#[derive(Debug, Clone)]
pub struct SortedList<T> {
    entries: Vec<SortedEntry<T>>,
    capacity: usize,
}

impl<T> SortedList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert after every entry whose key is `<= key`.
    ///
    /// Returns the value back if the list is full.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Result<usize, T> {
        if self.entries.len() >= self.capacity {
            return Err(value);
        }
        let key = key.into();
        let position = self.entries.partition_point(|e| e.key <= key);
        self.entries.insert(position, SortedEntry { key, value });
        Ok(position)
    }

    /// Remove the entry at `position`
    pub fn delete_at(&mut self, position: usize) -> Option<SortedEntry<T>> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    /// Position of the first entry whose value matches `pred`
    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<usize> {
        self.entries.iter().position(|e| pred(&e.value))
    }

    pub fn get(&self, position: usize) -> Option<&SortedEntry<T>> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortedEntry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
