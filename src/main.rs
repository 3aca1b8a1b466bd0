//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::config::AnalyzerConfig;
use chatlens::{ChatlensError, analyze, parse_bytes};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Progress goes to stderr so the JSON on stdout stays pipeable.
    eprintln!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input);
    match args.output {
        Some(ref path) => eprintln!("💾 Output:  {}", path),
        None => eprintln!("💾 Output:  stdout"),
    }
    eprintln!();

    eprintln!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let bytes = fs::read(&args.input)?;
    let records = parse_bytes(&bytes)?;
    eprintln!(
        "   Found {} messages ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    eprintln!("📊 Analyzing...");
    let analyze_start = Instant::now();
    let config = AnalyzerConfig::new()
        .with_top_words(args.top_words)
        .with_top_emojis(args.top_emojis);
    let summary = analyze(&records, &config)?;
    eprintln!(
        "   {} participants, {} words, {} emojis ({:.2}s)",
        summary.participants.len(),
        summary.total_words,
        summary.total_emojis,
        analyze_start.elapsed().as_secs_f64()
    );

    let json = if args.compact {
        serde_json::to_string(&summary)?
    } else {
        serde_json::to_string_pretty(&summary)?
    };

    eprintln!();
    match args.output {
        Some(ref path) => {
            fs::write(path, json)?;
            println!("✅ Done! Summary saved to {}", path);
        }
        None => {
            println!("{}", json);
        }
    }

    eprintln!();
    eprintln!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
