//! Video thumbnail derivation.
//!
//! The exercise form shows a thumbnail for the entered YouTube URL. The
//! extractor recognises the standard watch, shortened, and embed URL shapes,
//! all of which reduce to an 11-character video identifier. A URL that does
//! not match any shape simply yields no thumbnail; it is not an error.

use regex::Regex;
use std::sync::LazyLock;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|watch\?v=|watch\?.+&v=))([A-Za-z0-9_-]{11})")
        .expect("video id pattern is valid")
});

/// Thumbnail URL template, parameterised only by the video identifier.
const THUMBNAIL_TEMPLATE: &str = "https://img.youtube.com/vi/{id}/hqdefault.jpg";

/// Derives the thumbnail URL for a known video-sharing URL shape.
///
/// Returns `None` when no video identifier can be extracted; the caller
/// shows no preview in that case.
pub fn youtube_thumbnail_url(url: &str) -> Option<String> {
    let id = VIDEO_ID.captures(url)?.get(1)?.as_str();
    Some(THUMBNAIL_TEMPLATE.replace("{id}", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_url_shapes_yield_the_same_thumbnail() {
        let expected = "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg";
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?list=abc&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(
                youtube_thumbnail_url(url).as_deref(),
                Some(expected),
                "url {url:?}"
            );
        }
    }

    #[test]
    fn test_unrecognised_input_yields_no_thumbnail() {
        for url in [
            "not a url",
            "",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/short",
        ] {
            assert_eq!(youtube_thumbnail_url(url), None, "url {url:?}");
        }
    }

    #[test]
    fn test_identifier_allows_hyphen_and_underscore() {
        assert_eq!(
            youtube_thumbnail_url("https://youtu.be/a-b_c1D2e3F").as_deref(),
            Some("https://img.youtube.com/vi/a-b_c1D2e3F/hqdefault.jpg")
        );
    }
}
