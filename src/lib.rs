//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing aggregate
//! statistics: word frequency, emoji frequency, and hour-of-day activity.
//!
//! ## Overview
//!
//! Chatlens turns the unstructured text of an exported chat log into typed
//! records and a JSON-ready summary. It handles the format ambiguity of real
//! exports (locale-dependent date order, optional seconds and AM/PM markers,
//! non-UTF-8 files) so consumers see a single reliable pipeline:
//!
//! ```text
//! raw bytes → records → (word tokens, emoji tokens, hours) → summary
//! ```
//!
//! The pipeline is synchronous and stateless: one call processes one export
//! start to finish, nothing is shared between invocations.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_str("1/2/23, 9:00 AM - Alice: Hello 😀")?;
//!     let summary = analyze(&records, &AnalyzerConfig::new())?;
//!
//!     assert_eq!(summary.total_messages, 1);
//!     println!("{}", serde_json::to_string_pretty(&summary)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — WhatsApp TXT export parser
//!   - [`parse_bytes`](parser::parse_bytes), [`parse_str`](parser::parse_str)
//! - [`record`] — [`Record`], the parsed message type
//! - [`text`] — tokenization: word tokens, emoji tokens, stop words
//! - [`emoji`] — canonical emoji code-point table
//! - [`stats`] — frequency ranking and hourly bucketing
//! - [`summary`] — [`analyze`](summary::analyze) and [`Summary`](summary::Summary)
//! - [`config`] — [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod emoji;
pub mod error;
pub mod parser;
pub mod record;
pub mod stats;
pub mod summary;
pub mod text;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::{parse_bytes, parse_str};
pub use record::Record;
pub use summary::{Summary, analyze};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Record;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{parse_bytes, parse_str};

    // Analysis
    pub use crate::config::AnalyzerConfig;
    pub use crate::summary::{Summary, analyze};

    // Aggregates
    pub use crate::stats::{EmojiCount, HourlyBucket, WordCount, hourly_activity, top_n};
}
