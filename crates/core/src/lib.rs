//! # Fit Veda Core
//!
//! The content-authoring engine behind the Fit Veda admin surface.
//!
//! This crate contains the shared form-state machinery and its three
//! instantiations (exercise, diet plan, blog post):
//! - Drafts as immutable snapshots driven by pure field transitions
//! - Enumeration-backed single and multi selects
//! - Repeatable sub-record lists with a minimum cardinality of one
//! - Ordered, duplicate-free tag collection
//! - Submit-time validation gating a single submission event
//!
//! **No view concerns**: rendering, navigation, and authentication belong
//! to the calling surface. The engine only produces draft snapshots and
//! consumes field values.

pub mod blog;
pub mod config;
pub mod diet;
pub mod enumerations;
mod error;
pub mod exercise;
pub mod repeat;
pub mod store;
pub mod submission;
pub mod tags;
pub mod thumbnail;
pub mod validation;

pub use config::AuthoringConfig;
pub use error::{FormError, FormResult};
pub use store::{FormDraft, FormStateStore};
pub use submission::{LoggingSink, SubmissionEvent, SubmissionPipeline, SubmissionReceipt};
pub use thumbnail::youtube_thumbnail_url;
pub use validation::{Validate, ValidationErrors};
