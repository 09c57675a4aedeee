//! Repeatable sub-record lists.
//!
//! Diet plans hold an ordered list of meals and exercises an ordered list of
//! instruction steps. Both open with a single default entry and may never
//! shrink below one: the remove control stays live in the UI, so the
//! invariant is enforced here rather than by disabling the caller.

use serde::Serialize;

/// An ordered list of sub-records with a minimum cardinality of one.
///
/// Entries have no identity beyond their current position; order is
/// significant and preserved across every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepeatableList<T> {
    items: Vec<T>,
}

impl<T: Clone + Default> RepeatableList<T> {
    /// Creates the list with a single default-valued entry.
    pub fn new() -> Self {
        Self {
            items: vec![T::default()],
        }
    }

    /// Appends one default-valued entry at the end. Always succeeds.
    pub fn append(&mut self) {
        self.items.push(T::default());
    }

    /// Removes the entry at `index`.
    ///
    /// A list of length one is left unchanged (the minimum-cardinality
    /// invariant lives here, not in the caller).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds (a caller contract violation).
    pub fn remove_at(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "index {index} out of bounds for list of length {}",
            self.items.len()
        );
        if self.items.len() == 1 {
            return;
        }
        self.items.remove(index);
    }

    /// Replaces part of the entry at `index` via `update`, leaving every
    /// other entry untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds (a caller contract violation).
    pub fn update_at(&mut self, index: usize, update: impl FnOnce(&mut T)) {
        update(&mut self.items[index]);
    }

    /// Returns the entries in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; the list can never be empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone + Default> Default for RepeatableList<T> {
    fn default() -> Self {
        Self::new()
    }
}
