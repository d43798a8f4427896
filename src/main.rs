//! # chattab CLI
//!
//! Command-line driver for the chattab library.

use std::collections::HashSet;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chattab::cli::Args;
use chattab::format::{OutputFormat, write_to_format};
use chattab::{ChattabError, ContactDirectory, Resolver, Segmenter};

fn main() {
    let args = <Args as ClapParser>::parse();

    if args.verbose {
        init_tracing();
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chattab=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChattabError> {
    let total_start = Instant::now();
    let formats = requested_formats(args);

    println!("📦 chattab v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input.display());
    if let Some(contacts) = &args.contacts {
        println!("📇 Contacts: {}", contacts.display());
    }
    println!("💾 Output:   {}.*", args.output_base().display());
    println!(
        "📄 Formats:  {}",
        formats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    // Step 1: Segment
    let transcript_config = args.transcript_config()?;
    let segmenter = Segmenter::with_config(transcript_config)?;
    println!("⏳ Segmenting transcript...");
    let parse_start = Instant::now();
    let records = segmenter.segment_file(&args.input)?;
    println!(
        "   Found {} records ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Resolve senders
    let directory = match &args.contacts {
        Some(path) => {
            println!("📇 Loading contacts...");
            let directory = ContactDirectory::from_path(path)?;
            println!("   {} entries", directory.len());
            Some(directory)
        }
        None => None,
    };
    let resolver = Resolver::new(directory.as_ref());
    let stats = resolver.stats(&records);
    let resolved = resolver.resolve(records);

    // Step 3: Write
    let output_config = args.output_config(segmenter.config());
    for format in &formats {
        let path = args.output_path(*format);
        println!("💾 Writing {}...", format);
        let write_start = Instant::now();
        write_to_format(&resolved, &path, *format, &output_config)?;
        println!(
            "   {} ({:.2}s)",
            path.display(),
            write_start.elapsed().as_secs_f64()
        );
    }

    println!();
    println!("✅ Done!");

    println!();
    println!("📊 Summary:");
    println!("   Records:        {}", stats.records);
    println!("   Unique senders: {}", stats.unique_senders);
    if directory.is_some() {
        println!(
            "   Directory hits: {} ({:.1}%)",
            stats.directory_hits,
            stats.hit_ratio()
        );
    }
    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Requested formats in order, without repeats.
fn requested_formats(args: &Args) -> Vec<OutputFormat> {
    let mut seen = HashSet::new();
    args.formats
        .iter()
        .map(|&format| OutputFormat::from(format))
        .filter(|format| seen.insert(*format))
        .collect()
}
