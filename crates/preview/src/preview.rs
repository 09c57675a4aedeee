//! Image file handles and the asynchronous preview decode.
//!
//! The [`PreviewController`] owns the currently selected file and its derived
//! preview. Selecting a file stores it synchronously and returns a
//! [`DecodeRequest`] stamped with a fresh generation number; the request is
//! decoded off the cooperative thread and handed back to the controller,
//! which installs the result only if no newer selection has happened in the
//! meantime.
//!
//! # Ordering Guarantee
//!
//! If file A is selected and then file B before A's decode completes, the
//! preview ultimately visible must be B's (or nothing, if B was a removal),
//! regardless of the order in which the decodes resolve. Each call to
//! [`PreviewController::set_file`] bumps the generation counter, so a decode
//! that started under an older generation fails the identity check in
//! [`PreviewController::apply`] and is discarded.

use crate::PreviewError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Fallback media type when detection fails.
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// An opaque image file handle as selected by the user.
///
/// The handle carries the original filename and the raw bytes. Media-type
/// detection is a best-effort inspection of the leading bytes and should not
/// be considered authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    filename: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Creates a new handle from a filename and the file's raw bytes.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Returns the original filename from the selection.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the raw file content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the size of the file in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Detects the media type (MIME type) from the file content, if possible.
    pub fn media_type(&self) -> Option<&'static str> {
        infer::get(&self.bytes).map(|kind| kind.mime_type())
    }

    /// Returns whether the content looks like a known image format.
    ///
    /// Calling surfaces use this as the accepted-file-type gate before
    /// handing a file to a [`PreviewController`].
    pub fn is_image(&self) -> bool {
        infer::is_image(&self.bytes)
    }

    /// Returns the hexadecimal SHA-256 digest of the file content.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

impl Serialize for ImageFile {
    // Submission payloads carry the file's metadata, not its bytes.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Meta<'a> {
            filename: &'a str,
            size_bytes: u64,
            media_type: Option<&'static str>,
            sha256: String,
        }

        Meta {
            filename: &self.filename,
            size_bytes: self.size_bytes(),
            media_type: self.media_type(),
            sha256: self.sha256_hex(),
        }
        .serialize(serializer)
    }
}

/// A decoded, displayable preview of an image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Media type the data URL was built with
    pub media_type: String,
    /// `data:<media type>;base64,<payload>` rendering of the file content
    pub data_url: String,
    /// UTC timestamp when the decode completed
    pub decoded_at: DateTime<Utc>,
}

/// Decode work scheduled by [`PreviewController::set_file`].
///
/// The request is stamped with the generation that was current when the file
/// was selected; the stamp travels through [`DecodeRequest::decode`] into the
/// resulting [`DecodedPreview`] so the controller can recognise superseded
/// results.
#[derive(Debug, Clone)]
pub struct DecodeRequest {
    generation: u64,
    file: ImageFile,
}

impl DecodeRequest {
    /// Returns the generation this request was scheduled under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Decodes the file into a displayable preview.
    ///
    /// The base64 rendering runs on the blocking pool so large images do not
    /// stall the cooperative thread.
    ///
    /// # Errors
    ///
    /// Returns `PreviewError::DecodeTask` if the background task is cancelled
    /// or panics.
    pub async fn decode(self) -> Result<DecodedPreview, PreviewError> {
        let Self { generation, file } = self;

        let preview = tokio::task::spawn_blocking(move || {
            let media_type = file.media_type().unwrap_or(UNKNOWN_MEDIA_TYPE).to_owned();
            let payload = BASE64.encode(file.bytes());
            Preview {
                data_url: format!("data:{media_type};base64,{payload}"),
                media_type,
                decoded_at: Utc::now(),
            }
        })
        .await
        .map_err(|e| PreviewError::DecodeTask(e.to_string()))?;

        Ok(DecodedPreview {
            generation,
            preview,
        })
    }
}

/// The result of a completed decode, still stamped with its generation.
#[derive(Debug, Clone)]
pub struct DecodedPreview {
    generation: u64,
    preview: Preview,
}

impl DecodedPreview {
    /// Returns the generation the originating request was scheduled under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the decoded preview.
    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

/// Controller owning a selected file and its derived preview.
///
/// All mutation goes through [`set_file`](Self::set_file) and
/// [`apply`](Self::apply); the generation counter makes the pair safe
/// against out-of-order decode completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewController {
    file: Option<ImageFile>,
    preview: Option<Preview>,
    #[serde(skip)]
    generation: u64,
}

impl PreviewController {
    /// Creates a controller with no file selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected file.
    ///
    /// The file (or its removal) takes effect synchronously: any previous
    /// preview is cleared at once, so there is never a dangling preview for
    /// a file that is no longer selected. Selecting a file returns a
    /// [`DecodeRequest`] to be decoded asynchronously; passing `None` clears
    /// the selection and returns nothing.
    ///
    /// Every call bumps the generation counter, which orphans any decode
    /// still in flight for an earlier selection.
    pub fn set_file(&mut self, file: Option<ImageFile>) -> Option<DecodeRequest> {
        self.generation += 1;
        self.preview = None;
        self.file = file;

        self.file.clone().map(|file| DecodeRequest {
            generation: self.generation,
            file,
        })
    }

    /// Installs a completed decode, unless it has been superseded.
    ///
    /// The preview is applied only if the selected file at completion time
    /// is still the one that triggered the decode; a stale result is
    /// discarded. Returns whether the preview was installed.
    pub fn apply(&mut self, decoded: DecodedPreview) -> bool {
        if decoded.generation != self.generation {
            tracing::warn!(
                stale_generation = decoded.generation,
                current_generation = self.generation,
                "discarding superseded preview decode"
            );
            return false;
        }

        self.preview = Some(decoded.preview);
        true
    }

    /// Returns the currently selected file, if any.
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    /// Returns the current preview, if one has been decoded for the
    /// currently selected file.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }
}
