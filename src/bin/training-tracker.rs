// ABOUTME: Training tracker CLI - summarizes fitness tracker sensor packages
// ABOUTME: Handles single packages, JSON package files, and the reference demo dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summarize one package
//! training-tracker show RUN 15000 1 75
//!
//! # Summarize a JSON file of packages, skipping faulty ones
//! training-tracker batch packages.json --skip-invalid
//!
//! # Run the reference packages, JSON output
//! training-tracker demo --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use training_tracker::{
    batch::{load_packages, process_packages, sample_packages, SensorPackage},
    config::{FailurePolicy, OutputFormat, TrackerConfig},
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "training-tracker",
    about = "Fitness tracker training summaries",
    long_about = "Computes distance, mean speed, and calories from raw fitness tracker sensor packages."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit summaries as JSON instead of text lines
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Summarize a single sensor package
    Show {
        /// Workout code (RUN, WLK, SWM)
        code: String,

        /// Positional sensor values for the workout kind
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Summarize every package in a JSON file
    Batch {
        /// Path to a JSON array of {"code": ..., "data": [...]} packages
        file: PathBuf,

        /// Skip faulty packages instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Summarize the reference packages
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = TrackerConfig::global().clone();
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    let packages = match cli.command {
        Command::Show { code, values } => vec![SensorPackage::new(code, values)],
        Command::Batch { file, skip_invalid } => {
            if skip_invalid {
                config.failure_policy = FailurePolicy::Skip;
            }
            load_packages(&file)?
        }
        Command::Demo => sample_packages(),
    };

    info!(
        packages = packages.len(),
        policy = %config.failure_policy,
        format = %config.output_format,
        "Processing sensor packages"
    );

    let report = process_packages(&packages, &config)?;
    println!("{}", report.render(config.output_format)?);

    for skipped in &report.skipped {
        eprintln!(
            "skipped package {} ({}): {}. {}",
            skipped.index,
            skipped.code,
            skipped.error,
            skipped.error.code().description()
        );
    }

    Ok(())
}
