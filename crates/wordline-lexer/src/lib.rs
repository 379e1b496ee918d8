//! # Wordline Lexer
//!
//! Splits a line of text into words: maximal runs of bytes that are not
//! the ASCII space character.
//!
//! The scanner borrows the source and never allocates; each [`Word`]
//! is a slice of the input plus its byte [`Span`].
//!
//! ## Example
//!
//! ```
//! use wordline_lexer::Scanner;
//!
//! let words: Vec<_> = Scanner::new("Hi   there!").map(|w| w.text).collect();
//! assert_eq!(words, ["Hi", "there!"]);
//! ```

mod cursor;
mod scanner;
mod span;
mod word;

pub use scanner::Scanner;
pub use span::Span;
pub use word::Word;

/// Scan `source` into a lazy sequence of words.
pub fn words(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Count the words in `source` without allocating.
pub fn count_words(source: &str) -> usize {
    Scanner::new(source).count()
}
