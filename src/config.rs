//! Configuration for summary building.
//!
//! [`AnalyzerConfig`] controls how many entries the ranked frequency lists
//! carry. Defaults match the common case of a top-10 word and emoji list.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_top_words(5)
//!     .with_top_emojis(3);
//! ```

use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_TOP_N;

/// Configuration for [`analyze`](crate::summary::analyze).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum entries in the ranked word list (default: 10)
    pub top_words: usize,

    /// Maximum entries in the ranked emoji list (default: 10)
    pub top_emojis: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_words: DEFAULT_TOP_N,
            top_emojis: DEFAULT_TOP_N,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of ranked words.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the maximum number of ranked emojis.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }
}
