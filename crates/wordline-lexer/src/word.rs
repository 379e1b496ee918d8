//! Words produced by the scanner.

use crate::span::Span;

/// A maximal run of non-space bytes, borrowed from the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word<'source> {
    pub text: &'source str,
    pub span: Span,
}

impl<'source> Word<'source> {
    pub fn new(text: &'source str, span: Span) -> Self {
        debug_assert_eq!(text.len(), span.len());
        Self { text, span }
    }

    /// Length of the word in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
