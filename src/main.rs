//! # chatrecap CLI
//!
//! Command-line interface for the chatrecap library.
//!
//! The report goes to stdout (or `--output`); progress, year options and
//! search answers go to stderr so piped JSON/CSV stays clean.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatrecap::analysis::{AnalysisResult, SearchSource, analyze_with_config};
use chatrecap::cli::{Args, DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use chatrecap::config::{AnalysisConfig, ParserConfig};
use chatrecap::format::{render, write_report};
use chatrecap::parser::TranscriptParser;
use chatrecap::{ChatrecapError, Message};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_filter.as_deref());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatrecapError> {
    let total_start = Instant::now();
    let year = args.year_filter()?;
    let format = args.report_format()?;

    eprintln!("📊 chatrecap v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input.display());
    if let Some(output) = &args.output {
        eprintln!("💾 Output:  {}", output.display());
    }
    eprintln!("📄 Format:  {}", format);
    if let Some(year) = year {
        eprintln!("📅 Year:    {}", year);
    }
    eprintln!();

    let mut parser_config = ParserConfig::new();
    if let Some(sender) = &args.system_sender {
        parser_config = parser_config.with_system_sender(sender.clone());
    }

    eprintln!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let messages = TranscriptParser::with_config(parser_config).parse(&args.input)?;
    eprintln!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    eprintln!("🔍 Analyzing...");
    let analysis_config = AnalysisConfig::new()
        .with_year_filter(year)
        .with_top_n(args.top);
    let result = analyze_with_config(&messages, &analysis_config);
    if result.is_empty() {
        eprintln!("   No messages in the selected range");
    }
    if !result.year_options.is_empty() {
        let years: Vec<String> = result.year_options.iter().map(i32::to_string).collect();
        eprintln!("   Years available: {}", years.join(", "));
    }

    match &args.output {
        Some(path) => {
            write_report(&result, path, format)?;
            eprintln!("✅ Report saved to {}", path.display());
        }
        None => print!("{}", render(&result, format)?),
    }

    if !args.search.is_empty() {
        report_searches(&result, &messages, year, &args.search);
    }

    eprintln!();
    eprintln!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Answers each `--search` query against the analyzed messages.
fn report_searches(
    result: &AnalysisResult,
    messages: &[Message],
    year: Option<i32>,
    queries: &[String],
) {
    let analyzed: Vec<Message> = messages
        .iter()
        .filter(|m| year.is_none_or(|y| m.year() == y))
        .cloned()
        .collect();

    eprintln!();
    for query in queries {
        let hit = result.search(&analyzed, query);
        let unit = match hit.source {
            SearchSource::Index => "uses",
            SearchSource::Scan => "messages",
        };
        eprintln!("🔎 \"{}\": {} {}", hit.query, hit.total, unit);
        for entry in &hit.counts {
            eprintln!("   {}: {}", entry.sender, entry.count);
        }
    }
}

fn init_tracing(cli_filter: Option<&str>) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
