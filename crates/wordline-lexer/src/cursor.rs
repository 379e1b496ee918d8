//! Scan cursor threaded between word lookups.

const SPACE: u8 = b' ';

/// Byte-position cursor over the scanned source.
///
/// After a word has been returned the cursor rests on that word's first
/// byte, so the next lookup begins by stepping over the rest of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanCursor {
    position: usize,
    first: bool,
}

impl ScanCursor {
    /// Creates a cursor at byte offset `0` with no word consumed yet.
    pub(crate) fn new() -> Self {
        Self {
            position: 0,
            first: true,
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` until a word has been found.
    pub(crate) fn is_first(&self) -> bool {
        self.first
    }

    /// Returns `true` if the cursor is at the end of input.
    pub(crate) fn is_eof(&self, input: &[u8]) -> bool {
        self.position >= input.len()
    }

    /// Moves past the non-space run under the cursor.
    pub(crate) fn skip_word(&mut self, input: &[u8]) {
        while input.get(self.position).is_some_and(|&b| b != SPACE) {
            self.position += 1;
        }
    }

    /// Moves past any run of spaces under the cursor.
    pub(crate) fn skip_spaces(&mut self, input: &[u8]) {
        while input.get(self.position) == Some(&SPACE) {
            self.position += 1;
        }
    }

    /// Length of the non-space run starting at the cursor. Does not move.
    pub(crate) fn word_len(&self, input: &[u8]) -> usize {
        input[self.position.min(input.len())..]
            .iter()
            .take_while(|&&b| b != SPACE)
            .count()
    }

    /// Records that a word starting at the current position was returned.
    pub(crate) fn mark_consumed(&mut self) {
        self.first = false;
    }
}
