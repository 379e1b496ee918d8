//! # Wordline Sentence
//!
//! Builds a [`Sentence`], a growable collection of owned words, from a
//! line of text.
//!
//! Words are found by [`wordline_lexer::Scanner`] and copied out of the
//! source, so the sentence never borrows from its input. Capacity starts
//! at 5 slots and doubles whenever the sentence is full; both numbers are
//! tunable through [`SentenceConfig`].
//!
//! ## Example
//!
//! ```
//! let sentence = wordline_sentence::tokenize("  Hi   there!  ")?;
//!
//! assert_eq!(sentence.words(), ["Hi", "there!"]);
//! assert_eq!(sentence.render(), "Hi there!");
//! # Ok::<(), wordline_sentence::SentenceError>(())
//! ```

mod config;
mod copy;
mod error;
mod sentence;

pub use config::{
    SentenceConfig, SentenceConfigBuilder, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY,
};
pub use copy::copy_word;
pub use error::SentenceError;
pub use sentence::Sentence;

use tracing::{debug, trace};
use wordline_lexer::Scanner;

/// Tokenize `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Sentence, SentenceError> {
    tokenize_with(source, &SentenceConfig::default())
}

/// Tokenize `source` into a sentence built from `config`.
///
/// On failure everything acquired so far is released before the error is
/// returned.
pub fn tokenize_with(source: &str, config: &SentenceConfig) -> Result<Sentence, SentenceError> {
    let mut sentence = Sentence::with_config(config)?;

    for word in Scanner::new(source) {
        let Some(owned) = copy_word(word.text)? else {
            continue;
        };
        trace!("Copied word {:?} at {}..{}", owned, word.span.start, word.span.end);
        sentence.push(owned)?;
    }

    debug!(
        "Tokenized {} word(s), capacity {}",
        sentence.len(),
        sentence.capacity()
    );
    Ok(sentence)
}

/// Join the words of `sentence` with single spaces.
pub fn render(sentence: &Sentence) -> String {
    sentence.render()
}

/// Release `sentence` and every word it owns.
pub fn destroy(sentence: Sentence) {
    sentence.destroy();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_words_with_repeated_spaces() {
        let sentence = tokenize("Hi   there!").unwrap();
        assert_eq!(sentence.words(), ["Hi", "there!"]);
        assert_eq!(sentence.len(), 2);
    }

    #[test]
    fn test_leading_and_trailing_spaces() {
        let sentence = tokenize("  hi  there  ").unwrap();
        insta::assert_debug_snapshot!(sentence.words(), @r###"
        [
            "hi",
            "there",
        ]
        "###);
    }

    #[test]
    fn test_single_word() {
        let sentence = tokenize("hello").unwrap();
        assert_eq!(sentence.words(), ["hello"]);
        assert_eq!(sentence.len(), 1);
        assert_eq!(sentence.capacity(), 5);
    }

    #[test]
    fn test_blank_inputs_yield_nothing() {
        for source in ["", " ", "   "] {
            let sentence = tokenize(source).unwrap();
            assert!(sentence.is_empty(), "{:?}", source);
            assert_eq!(sentence.capacity(), 5);
        }
    }

    #[test]
    fn test_six_words_grow_once() {
        let sentence = tokenize("a b c d e f").unwrap();
        assert_eq!(sentence.words(), ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(sentence.capacity(), 10);
    }

    #[test]
    fn test_capacity_follows_word_count() {
        let cases = [(5, 5), (6, 10), (10, 10), (11, 20), (20, 20), (21, 40)];
        for (count, capacity) in cases {
            let source = vec!["w"; count].join("  ");
            let sentence = tokenize(&source).unwrap();
            assert_eq!(sentence.len(), count);
            assert_eq!(sentence.capacity(), capacity, "{} words", count);
        }
    }

    #[test]
    fn test_growth_keeps_earlier_entries_intact() {
        let source = "the quick brown fox jumps over the lazy dog again and again";
        let sentence = tokenize(source).unwrap();
        let expected: Vec<&str> = source.split(' ').collect();
        assert_eq!(sentence.words(), expected.as_slice());
        assert_eq!(sentence.capacity(), 20);
    }

    #[test]
    fn test_render_normalizes_spacing() {
        let sentence = tokenize("   one   two three    four ").unwrap();
        insta::assert_snapshot!(render(&sentence), @"one two three four");
    }

    #[test]
    fn test_render_is_idempotent() {
        let once = render(&tokenize(" a  b   c ").unwrap());
        let twice = render(&tokenize(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_words_do_not_borrow_source() {
        let sentence = {
            let source = String::from("short lived input");
            tokenize(&source).unwrap()
        };
        assert_eq!(sentence.render(), "short lived input");
    }

    #[test]
    fn test_hint_of_zero_uses_default() {
        let config = SentenceConfig::builder().initial_capacity(0).build();
        let sentence = tokenize_with("a b", &config).unwrap();
        assert_eq!(sentence.capacity(), 5);
    }

    #[test]
    fn test_custom_initial_capacity() {
        let config = SentenceConfig::builder().initial_capacity(2).build();
        let sentence = tokenize_with("a b c d e", &config).unwrap();
        assert_eq!(sentence.capacity(), 8);
        assert_eq!(sentence.render(), "a b c d e");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = SentenceConfig::builder().growth_factor(0).build();
        let err = tokenize_with("a", &config).unwrap_err();
        assert_eq!(err, SentenceError::InvalidGrowthFactor(0));
        assert!(!err.is_allocation());
        assert_eq!(err.to_string(), "growth factor must be at least 2, got 0");
    }

    #[test]
    fn test_unbounded_initial_capacity_is_an_allocation_error() {
        let config = SentenceConfig::builder().initial_capacity(usize::MAX).build();
        let err = tokenize_with("a", &config).unwrap_err();
        assert!(err.is_allocation());
    }

    #[test]
    fn test_destroy_consumes() {
        let sentence = tokenize("a b c d e f g").unwrap();
        destroy(sentence);
    }
}
