//! Fit Veda image preview support.
//!
//! This crate provides opaque image file handles and the asynchronous
//! file-to-preview conversion used by the authoring forms.
//!
//! ## Design Principles
//!
//! - A selected file is stored immediately; its preview is derived later
//! - A preview has no identity of its own: it is invalidated and recomputed
//!   whenever the source file changes, and cleared when the file is removed
//! - Decodes complete asynchronously; the preview shown always corresponds
//!   to the most recently *requested* decode, not the most recently
//!   *completed* one (last-request-wins)
//! - There is no cancellation primitive for in-flight decodes; superseded
//!   results are discarded on arrival instead
//! - Media-type detection is best-effort and never authoritative; the
//!   image-only gate belongs to the calling surface, not this crate
//!
//! ## Example Usage
//!
//! ```no_run
//! use fitveda_preview::{ImageFile, PreviewController};
//!
//! # async fn example() -> Result<(), fitveda_preview::PreviewError> {
//! let mut controller = PreviewController::new();
//! let file = ImageFile::new("cover.png", std::fs::read("cover.png").unwrap());
//!
//! if let Some(request) = controller.set_file(Some(file)) {
//!     let decoded = request.decode().await?;
//!     controller.apply(decoded);
//! }
//! # Ok(())
//! # }
//! ```

mod preview;

pub use preview::{DecodeRequest, DecodedPreview, ImageFile, Preview, PreviewController};

/// Errors that can occur during preview decoding
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The background decode task was cancelled or panicked
    #[error("preview decode task failed: {0}")]
    DecodeTask(String),
}
