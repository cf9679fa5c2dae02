use thiserror::Error;

/// Errors surfaced by the language selector.
///
/// Name resolution and region lookup never fail; they degrade to the
/// translation table or to the unknown region instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Invalid construction parameters (zero capacity, no candidates).
    #[error("invalid selector configuration: {0}")]
    Config(String),

    /// `select_by_index` was given an index outside the visible entries.
    #[error("selection index {index} is out of range ({len} selectable entries)")]
    Index { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SelectorError>;
