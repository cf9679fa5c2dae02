//! Fixed-capacity shortlist of quick-access languages.
//!
//! The shortlist is seeded from the head of the candidate list and only
//! changes when a language that is not already listed gets selected: it is
//! inserted at the front and the last entry is evicted. Languages already in
//! the shortlist are never re-ranked.

use crate::i18n::{LanguageCode, Result, SelectorError};
use serde::Serialize;

/// Number of quick-access slots when none is configured.
pub const DEFAULT_CAPACITY: usize = 3;

/// Ordered, duplicate-free list of at most `capacity` language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortlist {
    entries: Vec<LanguageCode>,
    #[serde(skip)]
    capacity: usize,
}

impl Shortlist {
    /// Take the first `capacity` codes from `candidates`, preserving order.
    ///
    /// # Errors
    /// `SelectorError::Config` if `capacity` is zero, or `candidates` is
    /// empty or lists a code twice.
    pub fn initialize(candidates: &[LanguageCode], capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SelectorError::Config(
                "shortlist capacity must be at least 1".to_string(),
            ));
        }
        if candidates.is_empty() {
            return Err(SelectorError::Config(
                "candidate language list is empty".to_string(),
            ));
        }

        if let Some(code) = first_duplicate(candidates) {
            return Err(SelectorError::Config(format!(
                "candidate language {} is listed more than once",
                code
            )));
        }

        let entries = candidates.iter().take(capacity).cloned().collect();
        Ok(Self { entries, capacity })
    }

    /// Move a newly selected language to the front.
    ///
    /// `None` and codes already present leave the order untouched. An absent
    /// code is inserted at the front and the last entry is evicted, so the
    /// length never changes.
    ///
    /// Returns `true` if the shortlist changed.
    pub fn promote(&mut self, code: Option<&LanguageCode>) -> bool {
        let Some(code) = code else {
            return false;
        };
        if self.contains(code) {
            return false;
        }

        self.entries.insert(0, code.clone());
        self.entries.pop();
        true
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.entries.contains(code)
    }

    /// Position of `code` in the shortlist, if listed.
    pub fn position(&self, code: &LanguageCode) -> Option<usize> {
        self.entries.iter().position(|entry| entry == code)
    }

    pub fn get(&self, index: usize) -> Option<&LanguageCode> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[LanguageCode] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.entries.iter()
    }

    /// Visible index of `code` when `offset` slots precede the shortlist.
    ///
    /// `None` and unlisted codes map to `offset - 1`, which is the auto-detect
    /// slot when detection mode reserves index 0.
    pub fn visible_index(&self, code: Option<&LanguageCode>, offset: usize) -> isize {
        let position = code
            .and_then(|code| self.position(code))
            .map(|position| position as isize)
            .unwrap_or(-1);
        position + offset as isize
    }
}

/// First code that appears more than once in `codes`.
pub(crate) fn first_duplicate(codes: &[LanguageCode]) -> Option<&LanguageCode> {
    codes
        .iter()
        .enumerate()
        .find(|(i, code)| codes[..*i].contains(code))
        .map(|(_, code)| code)
}
