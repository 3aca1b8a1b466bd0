//! Command-line interface definition using clap.
//!
//! The binary is the reference consumer of the library: it reads one export
//! file, runs the parse-and-analyze pipeline, and writes the summary JSON to
//! stdout or a file.

use clap::Parser;

/// Analyze a WhatsApp chat export: word frequency, emoji frequency,
/// and hourly activity.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -o summary.json
    chatlens chat.txt --top-words 20 --compact")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Path to output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of entries in the ranked word list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Number of entries in the ranked emoji list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_emojis: usize,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
