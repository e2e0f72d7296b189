//! # CLI Module
//!
//! Command-line interface for the signing pipeline.
//!
//! ## Usage
//! ```bash
//! # Sign a batch of values
//! data-signer sign 0 1 2
//!
//! # JSON report
//! data-signer sign 0 1 --output json
//!
//! # Just the combined signature
//! data-signer sign 0 1 --output minimal
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use data_signer::core::pipeline::{Pipeline, PipelineReport};
use data_signer::core::primitives::{Checksum, SerializedDigest, Sha256Digest, Xxh3Checksum};
use data_signer::core::stages::{
    CollectSink, CombineStage, MultiHashStage, SingleHashStage, ValueSource,
};
use data_signer::error::Result;
use data_signer::events::{self, Event, PipelineEvent, StageEvent};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::thread;

/// Data Signer - combined signatures over a batch of values
#[derive(Parser, Debug)]
#[command(name = "data-signer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the signing pipeline over a batch of values
    Sign {
        /// Values to sign
        #[arg(required = true)]
        values: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Combined signature only
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sign {
            values,
            output,
            verbose,
        } => run_sign(values, output, verbose),
    }
}

fn run_sign(values: Vec<String>, output: OutputFormat, verbose: bool) -> Result<()> {
    let term = Term::stderr();

    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Data Signer").bold().cyan(),
            style("v0.1.0").dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let item_count = values.len();
    let checksum: Arc<dyn Checksum> = Arc::new(Xxh3Checksum);
    let digest = SerializedDigest::new(Arc::new(Sha256Digest));
    let (sink, results) = CollectSink::new();

    let pipeline = Pipeline::builder()
        .stage(ValueSource::new(values))
        .stage(SingleHashStage::new(Arc::clone(&checksum), digest))
        .stage(MultiHashStage::new(checksum))
        .stage(CombineStage::new())
        .stage(sink)
        .build();

    // Set up event handling
    let (sender, receiver) = events::channel();

    // Spinner for pretty output
    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Stage(StageEvent::Started { name }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(name);
                        pb.tick();
                    }
                }
                Event::Pipeline(PipelineEvent::Completed { .. })
                | Event::Pipeline(PipelineEvent::Error { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    // Run the pipeline
    let run_result = pipeline.run_with_events(&sender);

    // Drop sender to signal the event thread to finish
    drop(sender);
    event_thread.join().ok();

    let report = run_result?;

    // The combine stage emits exactly one string, even for one value.
    let signature = results.try_iter().next().unwrap_or_default();

    match output {
        OutputFormat::Pretty => {
            print_pretty_results(&term, &signature, &report, item_count, verbose)
        }
        OutputFormat::Json => print_json_results(&signature, &report, item_count),
        OutputFormat::Minimal => println!("{}", signature),
    }

    Ok(())
}

fn print_pretty_results(
    term: &Term,
    signature: &str,
    report: &PipelineReport,
    item_count: usize,
    verbose: bool,
) {
    term.write_line(&format!("{} Signing Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} values signed in {:.1}s",
        style(item_count).cyan(),
        report.duration_ms as f64 / 1000.0
    ))
    .ok();

    if verbose {
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Stages:").bold().underlined()))
            .ok();
        for stage in &report.stages {
            term.write_line(&format!(
                "  {} {} in, {} out",
                style(format!("{}:", stage.name)).bold(),
                stage.items_in,
                stage.items_out
            ))
            .ok();
        }
    }

    term.write_line("").ok();
    println!("{}", signature);
}

fn print_json_results(signature: &str, report: &PipelineReport, item_count: usize) {
    let output = serde_json::json!({
        "signature": signature,
        "values": item_count,
        "duration_ms": report.duration_ms,
        "stages": report.stages,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_default()
    );
}
