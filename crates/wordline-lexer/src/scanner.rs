//! High-level scanner interface.

use crate::cursor::ScanCursor;
use crate::span::Span;
use crate::word::Word;
use std::iter::FusedIterator;

/// A scanner over space-separated words.
///
/// Yields each maximal run of non-space bytes once, left to right. Runs of
/// spaces collapse into one boundary; leading and trailing spaces are
/// skipped. Only U+0020 separates words. Once exhausted the scanner keeps
/// returning `None` and cannot be restarted.
pub struct Scanner<'source> {
    source: &'source str,
    cursor: ScanCursor,
    peeked: Option<Option<Word<'source>>>,
    /// Set once the end of input has been reported
    done: bool,
}

impl<'source> Scanner<'source> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            cursor: ScanCursor::new(),
            peeked: None,
            done: false,
        }
    }

    /// Peek at the next word without consuming it.
    pub fn peek(&mut self) -> Option<&Word<'source>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_inner());
        }
        self.peeked.as_ref().and_then(|word| word.as_ref())
    }

    /// Get the source text.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Get the current byte position in the source.
    ///
    /// After a word is returned (or peeked) this is that word's start offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Find the next word, or `None` when only spaces remain.
    pub fn next_word(&mut self) -> Option<Word<'source>> {
        if let Some(peeked) = self.peeked.take() {
            return peeked;
        }
        self.next_inner()
    }

    fn next_inner(&mut self) -> Option<Word<'source>> {
        if self.done {
            return None;
        }

        let bytes = self.source.as_bytes();

        // The cursor sits on the word returned last time; step over it.
        if !self.cursor.is_first() {
            self.cursor.skip_word(bytes);
        }
        self.cursor.skip_spaces(bytes);

        if self.cursor.is_eof(bytes) {
            self.done = true;
            return None;
        }

        let start = self.cursor.position();
        let len = self.cursor.word_len(bytes);
        self.cursor.mark_consumed();

        // Both ends sit next to an ASCII space or the end of input, so they
        // are always char boundaries.
        let span = Span::at(start, len);
        Some(Word::new(&self.source[span.range()], span))
    }
}

impl<'source> Iterator for Scanner<'source> {
    type Item = Word<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }
}

impl FusedIterator for Scanner<'_> {}
