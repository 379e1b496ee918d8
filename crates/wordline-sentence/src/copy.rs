//! Copying borrowed words into owned storage.

use crate::error::SentenceError;

/// Copy `word` into a newly allocated `String` of exactly its length.
///
/// An empty word performs no copy and yields `Ok(None)`; the builder
/// stores nothing for it.
pub fn copy_word(word: &str) -> Result<Option<String>, SentenceError> {
    if word.is_empty() {
        return Ok(None);
    }

    let mut owned = String::new();
    owned
        .try_reserve_exact(word.len())
        .map_err(SentenceError::word_bytes(word.len()))?;
    owned.push_str(word);
    Ok(Some(owned))
}
