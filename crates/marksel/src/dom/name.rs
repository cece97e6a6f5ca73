//! Module: dom::name
//! Responsibility: validated element naming.
//! Does not own: attribute storage or tree structure.
//! Boundary: all tag-name construction for the document arena.
//!
//! Invariants:
//! - Tag names are ASCII, non-empty, and stored lowercase.
//! - All construction paths validate invariants.

use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;

///
/// TagNameError
///

#[derive(Debug, ThisError)]
pub enum TagNameError {
    #[error("tag name is empty")]
    Empty,

    #[error("tag name contains invalid character '{ch}'")]
    InvalidChar { ch: char },
}

///
/// TagName
///
/// Validated, lowercase-normalized element name. Matching against tag names
/// is case-insensitive by construction: both sides normalize on entry.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TagName(String);

impl TagName {
    /// Validate and construct a tag name from one ASCII string.
    pub fn try_from_str(name: &str) -> Result<Self, TagNameError> {
        if name.is_empty() {
            return Err(TagNameError::Empty);
        }
        for ch in name.chars() {
            if !(ch.is_ascii_alphanumeric() || ch == '-') {
                return Err(TagNameError::InvalidChar { ch });
            }
        }

        Ok(Self(name.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagName {
    type Err = TagNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_lowercase() {
        let name = TagName::try_from_str("DIV").unwrap();
        assert_eq!(name.as_str(), "div");
    }

    #[test]
    fn accepts_custom_element_dashes() {
        let name = TagName::try_from_str("my-widget").unwrap();
        assert_eq!(name.as_str(), "my-widget");
    }

    #[test]
    fn rejects_empty() {
        let err = TagName::try_from_str("").unwrap_err();
        assert!(matches!(err, TagNameError::Empty));
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = TagName::try_from_str("di v").unwrap_err();
        assert!(matches!(err, TagNameError::InvalidChar { ch: ' ' }));

        let err = TagName::try_from_str("dïv").unwrap_err();
        assert!(matches!(err, TagNameError::InvalidChar { ch: 'ï' }));
    }
}
