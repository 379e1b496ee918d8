//! Sentence growth configuration.

use crate::error::SentenceError;

/// Slots reserved before the first word is stored.
pub const DEFAULT_INITIAL_CAPACITY: usize = 5;
/// Capacity multiplier applied whenever the sentence is full.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Configuration for building a [`Sentence`](crate::Sentence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceConfig {
    /// Initial slot count (0 means the default of 5)
    pub initial_capacity: usize,
    /// Capacity multiplier on growth (default 2, must be at least 2)
    pub growth_factor: usize,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl SentenceConfig {
    /// Create config from environment variables.
    ///
    /// Reads `WORDLINE_INITIAL_CAPACITY` and `WORDLINE_GROWTH_FACTOR`;
    /// missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            initial_capacity: parse("WORDLINE_INITIAL_CAPACITY", DEFAULT_INITIAL_CAPACITY),
            growth_factor: parse("WORDLINE_GROWTH_FACTOR", DEFAULT_GROWTH_FACTOR),
        }
    }

    /// The capacity a new sentence starts with.
    pub fn effective_initial_capacity(&self) -> usize {
        if self.initial_capacity == 0 {
            DEFAULT_INITIAL_CAPACITY
        } else {
            self.initial_capacity
        }
    }

    /// Reject settings that would stop the sentence from growing.
    pub fn validate(&self) -> Result<(), SentenceError> {
        if self.growth_factor < 2 {
            return Err(SentenceError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }

    /// Create a builder for configuration.
    pub fn builder() -> SentenceConfigBuilder {
        SentenceConfigBuilder::default()
    }
}

/// Builder for sentence configuration.
#[derive(Debug, Default)]
pub struct SentenceConfigBuilder {
    config: SentenceConfig,
}

impl SentenceConfigBuilder {
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.config.growth_factor = factor;
        self
    }

    pub fn build(self) -> SentenceConfig {
        self.config
    }
}
