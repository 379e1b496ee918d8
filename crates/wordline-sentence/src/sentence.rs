//! The growable word collection.

use crate::config::SentenceConfig;
use crate::error::SentenceError;
use std::fmt;
use tracing::{debug, trace};

/// An ordered collection of owned words.
///
/// Keeps its own logical capacity so the growth policy is observable:
/// a sentence starts with the configured slot count and multiplies it by
/// the growth factor each time an append finds every slot occupied.
/// Capacity never shrinks and `len() <= capacity()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sentence {
    capacity: usize,
    words: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    growth_factor: usize,
}

impl Sentence {
    /// Create an empty sentence from `config`.
    pub(crate) fn with_config(config: &SentenceConfig) -> Result<Self, SentenceError> {
        config.validate()?;

        let capacity = config.effective_initial_capacity();
        let mut words = Vec::new();
        words
            .try_reserve_exact(capacity)
            .map_err(SentenceError::slots(capacity))?;

        Ok(Self {
            capacity,
            words,
            growth_factor: config.growth_factor,
        })
    }

    /// Append an owned word, growing first if every slot is taken.
    ///
    /// On failure `word` is released before the error is returned.
    pub(crate) fn push(&mut self, word: String) -> Result<(), SentenceError> {
        if self.words.len() == self.capacity {
            if let Err(err) = self.grow() {
                drop(word);
                return Err(err);
            }
        }

        self.words.push(word);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), SentenceError> {
        let new_capacity = self.capacity.saturating_mul(self.growth_factor);
        self.words
            .try_reserve_exact(new_capacity - self.words.len())
            .map_err(SentenceError::slots(new_capacity))?;

        debug!(
            "Growing sentence capacity from {} to {}",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Current logical slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Join the words with single spaces.
    pub fn render(&self) -> String {
        self.words.join(" ")
    }

    /// Hand the words to the caller, releasing only the sentence itself.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Release every word, then the backing storage.
    pub fn destroy(self) {
        trace!("Releasing sentence with {} word(s)", self.words.len());
        drop(self);
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words.iter();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                write!(f, " {}", word)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for Sentence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
