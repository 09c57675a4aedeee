/// Errors that can occur when creating validated tag values.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// The input was empty once trimmed and stripped of its leading `#`
    #[error("Tag cannot be empty")]
    Empty,
}

/// A normalised content tag.
///
/// This type wraps a `String` and guarantees the tag invariant: non-empty,
/// no leading `#`, no surrounding whitespace. The input is trimmed, one
/// leading `#` is stripped if present, and the result is trimmed again, so
/// `"#foo"`, `" foo "` and `"foo"` all normalise to the same tag.
///
/// Equality is exact string equality on the normalised form. Every entry
/// path into a tag collection must construct tags through [`Tag::parse`] so
/// that uniqueness holds regardless of how the tag was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

impl Tag {
    /// Creates a new `Tag` from raw user input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(Tag)` holding the normalised text, or
    /// `Err(TagError::Empty)` if nothing remains after normalisation.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TagError> {
        let trimmed = input.as_ref().trim();
        let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
        if stripped.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(Self(stripped.to_owned()))
    }

    /// Returns the normalised tag text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_hash_and_whitespace() {
        for raw in ["#foo", " foo ", "foo", " #foo "] {
            let tag = Tag::parse(raw).expect("tag should parse");
            assert_eq!(tag.as_str(), "foo");
        }
    }

    #[test]
    fn test_parse_strips_only_one_hash() {
        let tag = Tag::parse("##foo").expect("tag should parse");
        assert_eq!(tag.as_str(), "#foo");
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        for raw in ["", "   ", "#", " # "] {
            assert!(matches!(Tag::parse(raw), Err(TagError::Empty)));
        }
    }

    #[test]
    fn test_equality_is_exact_on_normalised_form() {
        let a = Tag::parse("#foo").expect("tag should parse");
        let b = Tag::parse(" foo ").expect("tag should parse");
        let c = Tag::parse("Foo").expect("tag should parse");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialises_as_plain_string() {
        let tag = Tag::parse("#fitveda").expect("tag should parse");
        let json = serde_json::to_string(&tag).expect("tag should serialise");
        assert_eq!(json, "\"fitveda\"");

        let back: Tag = serde_json::from_str(&json).expect("tag should deserialise");
        assert_eq!(back, tag);
    }
}
