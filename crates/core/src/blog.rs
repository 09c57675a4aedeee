//! The blog-post creation form.
//!
//! The richer of the original form definitions is authoritative here:
//! free-text content plus hashtags, a cover image with an asynchronous
//! preview, and optional SEO metadata.

use crate::config::AuthoringConfig;
use crate::enumerations::{SingleSelect, BLOG_CATEGORIES, VISIBILITIES};
use crate::store::FormDraft;
use crate::tags::TagList;
use crate::validation::{Validate, ValidationErrors};
use crate::FormResult;
use chrono::{NaiveDate, Utc};
use fitveda_preview::{DecodeRequest, DecodedPreview, ImageFile, PreviewController};
use serde::Serialize;

/// Draft of one blog post being authored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    /// Cover image and its derived preview.
    pub cover: PreviewController,
    pub content: String,
    pub tags: TagList,
    pub category: SingleSelect,
    /// Attributed author; fixed for the session, not editable in the form.
    pub author: String,
    pub publish_date: NaiveDate,
    pub visibility: SingleSelect,
    pub meta_title: String,
    pub meta_description: String,
}

/// A single field replacement on a [`BlogDraft`].
///
/// Cover-image selection is not a plain field replacement, since it also
/// schedules an asynchronous decode; it lives on [`BlogDraft::set_cover`]
/// instead.
#[derive(Debug, Clone)]
pub enum BlogField {
    Title(String),
    Content(String),
    TagBuffer(String),
    CommitTag,
    AddTagFromSuggestion(String),
    RemoveTag(String),
    Category(String),
    PublishDate(NaiveDate),
    Visibility(String),
    MetaTitle(String),
    MetaDescription(String),
}

impl BlogDraft {
    /// Creates the draft attributed to the configured author.
    pub fn for_author(config: &AuthoringConfig) -> Self {
        Self {
            author: config.author_name().to_owned(),
            ..Self::new_draft()
        }
    }

    /// Replaces the cover image (or removes it with `None`).
    ///
    /// The file takes effect synchronously; the returned [`DecodeRequest`],
    /// if any, is decoded asynchronously and applied back through
    /// [`BlogDraft::apply_cover`].
    pub fn set_cover(mut self, file: Option<ImageFile>) -> (Self, Option<DecodeRequest>) {
        let request = self.cover.set_file(file);
        (self, request)
    }

    /// Installs a completed cover decode unless it has been superseded.
    pub fn apply_cover(mut self, decoded: DecodedPreview) -> Self {
        self.cover.apply(decoded);
        self
    }
}

impl FormDraft for BlogDraft {
    type Field = BlogField;

    fn new_draft() -> Self {
        Self {
            title: String::new(),
            cover: PreviewController::new(),
            content: String::new(),
            tags: TagList::new(),
            category: SingleSelect::new(&BLOG_CATEGORIES),
            author: AuthoringConfig::default().author_name().to_owned(),
            publish_date: Utc::now().date_naive(),
            visibility: SingleSelect::preset(&VISIBILITIES, "Public"),
            meta_title: String::new(),
            meta_description: String::new(),
        }
    }

    fn apply(mut self, field: BlogField) -> FormResult<Self> {
        match field {
            BlogField::Title(v) => self.title = v,
            BlogField::Content(v) => self.content = v,
            BlogField::TagBuffer(v) => self.tags.set_buffer(v),
            BlogField::CommitTag => self.tags.add_from_buffer(),
            BlogField::AddTagFromSuggestion(v) => self.tags.add_from_suggestion(&v),
            BlogField::RemoveTag(v) => self.tags.remove(&v),
            BlogField::Category(v) => self.category.select(&v)?,
            BlogField::PublishDate(v) => self.publish_date = v,
            BlogField::Visibility(v) => self.visibility.select(&v)?,
            BlogField::MetaTitle(v) => self.meta_title = v,
            BlogField::MetaDescription(v) => self.meta_description = v,
        }
        Ok(self)
    }
}

impl Validate for BlogDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("title", !self.title.trim().is_empty());
        errors.require("content", !self.content.trim().is_empty());
        errors
    }
}
