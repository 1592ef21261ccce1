//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::{LevelFilter, info, warn};

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::core::analyze_with_config;
use chatstat::format::{OutputFormat, to_format_string, write_to_format};
use chatstat::parser::LineParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    // RUST_LOG still wins when set
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let start = Instant::now();
    let format = args.output_format();
    if let (Some(path), Some(_)) = (&args.output, args.format) {
        if OutputFormat::from_path(path).is_ok_and(|detected| detected != format) {
            warn!("{} report written to {}, whose extension suggests another format", format, path);
        }
    }

    let parser = LineParser::with_config(args.parser_config());
    let messages = parser.parse_file(&args.input)?;
    info!(
        "Parsed {} messages from {} in {:.2}s",
        messages.len(),
        args.input,
        start.elapsed().as_secs_f64()
    );

    let stats = analyze_with_config(&messages, args.stats_config());

    match &args.output {
        Some(path) => {
            write_to_format(&stats, path, format)?;
            println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("📂 Input:    {}", args.input);
            println!("💬 Messages: {}", stats.total_message_count());
            println!("👥 Senders:  {}", stats.senders().len());
            println!("✅ {} report saved to {}", format, path);
        }
        None => {
            let report = to_format_string(&stats, format)?;
            print!("{report}");
            if !report.ends_with('\n') {
                println!();
            }
        }
    }

    info!("Finished in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
