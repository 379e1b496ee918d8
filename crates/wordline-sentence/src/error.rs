//! Sentence error definitions.

use std::collections::TryReserveError;
use thiserror::Error;

/// An error raised while building a sentence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error("failed to allocate {requested} {what}")]
    Allocation {
        what: &'static str,
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("growth factor must be at least 2, got {0}")]
    InvalidGrowthFactor(usize),
}

impl SentenceError {
    pub(crate) fn slots(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |source| SentenceError::Allocation {
            what: "sentence slots",
            requested,
            source,
        }
    }

    pub(crate) fn word_bytes(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |source| SentenceError::Allocation {
            what: "word bytes",
            requested,
            source,
        }
    }

    /// Check whether this is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, SentenceError::Allocation { .. })
    }
}
