//! Byte ranges into scanned source text.

use std::ops::Range;

/// A span is a half-open byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end offsets.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create a span of `len` bytes starting at `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Get the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range`, suitable for slicing the source.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
