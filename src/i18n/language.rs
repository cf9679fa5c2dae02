//! Language code type: an opaque, exact-match identifier.
//!
//! Codes are either ISO 639-style spoken language codes ("en", "fr") or
//! signed-language registry codes ("ase", "gsg"). Nothing about the code is
//! validated beyond it being a string; equality is byte-for-byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pseudo-code for International Sign. Its region is always itself.
pub const INTERNATIONAL_SIGN: &str = "ils";

/// Region code used when the registry has no record for a language.
pub const UNKNOWN_REGION: &str = "xx";

/// An opaque language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code has the canonical two-character form ("en", "fr").
    ///
    /// Only these codes are handed to a locale-native formatter.
    pub fn is_two_letter(&self) -> bool {
        self.0.chars().count() == 2
    }

    /// Whether this is the International Sign pseudo-code.
    pub fn is_international_sign(&self) -> bool {
        self.0 == INTERNATIONAL_SIGN
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Convert a list of string slices into language codes.
pub fn codes(list: &[&str]) -> Vec<LanguageCode> {
    list.iter().map(|code| LanguageCode::from(*code)).collect()
}
