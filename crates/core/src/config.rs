//! Authoring-session configuration.
//!
//! Configuration is resolved once at startup and passed into draft
//! construction. Nothing in the engine reads process-wide state mid
//! operation, which keeps the transitions pure and the tests hermetic.

use crate::{FormError, FormResult};

/// Display name used for the blog author field when none is configured.
pub const DEFAULT_AUTHOR_NAME: &str = "Gym Specialist";

/// Configuration for one authoring session.
#[derive(Clone, Debug)]
pub struct AuthoringConfig {
    author_name: String,
}

impl AuthoringConfig {
    /// Create a new `AuthoringConfig`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidConfig` if the author name is empty or
    /// whitespace-only.
    pub fn new(author_name: impl Into<String>) -> FormResult<Self> {
        let author_name = author_name.into();
        if author_name.trim().is_empty() {
            return Err(FormError::InvalidConfig(
                "author name cannot be empty".into(),
            ));
        }
        Ok(Self { author_name })
    }

    /// Returns the display name attributed to authored content.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            author_name: DEFAULT_AUTHOR_NAME.to_owned(),
        }
    }
}
