//! URL-safe shoe identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted slug length.
const MAX_SLUG_LENGTH: usize = 128;

/// Errors that can occur when parsing a slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,
    #[error("slug is longer than {MAX_SLUG_LENGTH} characters")]
    TooLong,
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("slug cannot start or end with '-'")]
    EdgeHyphen,
}

/// A shoe's URL identifier, e.g. `tail-step`.
///
/// Only lowercase ASCII letters, digits and interior hyphens are accepted, so
/// a slug can be dropped into a path segment without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug.
    ///
    /// # Errors
    ///
    /// Returns `SlugError` if the slug is empty, too long, has a leading or
    /// trailing hyphen, or contains anything other than `[a-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }
        if s.len() > MAX_SLUG_LENGTH {
            return Err(SlugError::TooLong);
        }
        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter(c));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the shoe's detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
