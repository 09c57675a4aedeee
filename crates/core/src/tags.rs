//! Free-form tag collection.
//!
//! Tags reach the list through two paths: manual text entry (via an input
//! buffer) and one-click trending suggestions. Both paths normalise through
//! [`Tag::parse`], which is what guarantees the uniqueness invariant
//! regardless of how a tag was entered.

use fitveda_types::Tag;
use serde::Serialize;

/// An ordered, duplicate-free tag list plus the manual-entry input buffer.
///
/// Only the tags themselves appear in submission payloads; the buffer is
/// transient view input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList {
    tags: Vec<Tag>,
    #[serde(skip)]
    buffer: String,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the manual-entry input buffer (the user typing).
    pub fn set_buffer(&mut self, raw: impl Into<String>) {
        self.buffer = raw.into();
    }

    /// Returns the current input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Commits the input buffer as a tag (the Enter key / Add click).
    ///
    /// The buffer is cleared only when a tag was actually appended, so a
    /// duplicate or empty entry leaves the user's text in place.
    pub fn add_from_buffer(&mut self) {
        let raw = self.buffer.clone();
        self.add_from_text(&raw);
    }

    /// Adds a tag from raw text: trim, strip one leading `#`; empty or
    /// already-present results are a no-op. On append, the input buffer is
    /// cleared.
    pub fn add_from_text(&mut self, raw: &str) {
        if self.insert(raw) {
            self.buffer.clear();
        }
    }

    /// Adds a pre-normalised suggestion (a trending tag chip). Same
    /// normalisation and dedupe rule as manual entry; the input buffer is
    /// not touched.
    pub fn add_from_suggestion(&mut self, suggestion: &str) {
        self.insert(suggestion);
    }

    /// Removes the matching tag; removing a non-existent tag is a no-op.
    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t.as_str() != tag);
    }

    /// Returns the tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn insert(&mut self, raw: &str) -> bool {
        let Ok(tag) = Tag::parse(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }
}
