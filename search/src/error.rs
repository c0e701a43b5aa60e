//! Typed search errors.
//!
//! `SearchError` covers configuration failures only. Runtime outcomes of a
//! search (goal reached, frontier exhausted) are not errors; they are
//! reported through [`crate::search::Outcome`] and the expansion log.

/// Typed failure for search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy tag did not name one of the five strategies.
    UnknownStrategy { tag: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { tag } => {
                write!(
                    f,
                    "unknown search strategy {tag:?} (expected breadth, depth, uniform, greedy or a*)"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
