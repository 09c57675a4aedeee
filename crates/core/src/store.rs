//! The form-state store.
//!
//! Every form is driven by the same engine: a draft type whose field
//! updates are pure transitions (`draft -> draft`), held by a
//! [`FormStateStore`] that swaps in one immutable snapshot per user event.
//! The view layer never mutates a draft directly; it sends field values
//! through [`FormStateStore::update`] and reads the resulting snapshot.

use crate::FormResult;

/// A form draft driven by pure field transitions.
pub trait FormDraft: Clone {
    /// The set of field replacements this form accepts. Updates are
    /// expressed as enum variants, so an unknown field name cannot be
    /// written at all.
    type Field;

    /// Creates the draft with this form's type-specific defaults.
    fn new_draft() -> Self;

    /// Applies one field replacement, leaving all other fields untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement violates a field invariant (for
    /// example a selection outside the enumeration registry); the previous
    /// snapshot remains current in that case.
    fn apply(self, field: Self::Field) -> FormResult<Self>;
}

/// Holds the current draft snapshot for one open form.
///
/// The store owns the draft for the form's whole lifetime; snapshots are
/// replaced, never aliased or mutated in place. Dropping the store (or
/// surrendering the draft at submission) discards the state; there is no
/// save and no undo.
#[derive(Debug, Clone)]
pub struct FormStateStore<D: FormDraft> {
    draft: D,
}

impl<D: FormDraft> FormStateStore<D> {
    /// Opens the form with type-specific defaults.
    pub fn open() -> Self {
        Self {
            draft: D::new_draft(),
        }
    }

    /// Opens the form over a caller-constructed draft (used when defaults
    /// depend on configuration).
    pub fn with_draft(draft: D) -> Self {
        Self { draft }
    }

    /// Returns the current snapshot.
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Applies one field replacement and swaps in the new snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the draft's transition error; the previous snapshot stays
    /// current.
    pub fn update(&mut self, field: D::Field) -> FormResult<&D> {
        let next = self.draft.clone().apply(field)?;
        self.draft = next;
        Ok(&self.draft)
    }

    /// Runs an engine operation that both transforms the draft and yields a
    /// value (decode scheduling is the one caller that needs this shape).
    pub fn transition<T>(&mut self, op: impl FnOnce(D) -> (D, T)) -> T {
        let (next, out) = op(self.draft.clone());
        self.draft = next;
        out
    }

    /// Surrenders the draft, closing the form.
    pub fn into_draft(self) -> D {
        self.draft
    }
}
