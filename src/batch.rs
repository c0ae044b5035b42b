// ABOUTME: Batch driver feeding sensor packages through the workout engine
// ABOUTME: Loads package files, applies the failure policy, and renders the resulting summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor package batches
//!
//! A package is one `(workout_code, data_values)` pair as emitted by the
//! tracker. Packages are independent, so large batches are summarized on the
//! rayon pool; results always come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use tracker_metrics::{build_workout, summarize, TrainingSummary, WorkoutError};

use crate::config::{FailurePolicy, OutputFormat, TrackerConfig};

/// Errors raised while reading or rendering a batch
#[derive(Debug, Error)]
pub enum BatchError {
    /// Package file could not be read
    #[error("Failed to read package file {path}")]
    Io {
        /// Path of the package file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Package file or output is not valid JSON
    #[error("Invalid package JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A package faulted under the abort policy
    #[error("Package {index} ({code}) failed: {source}")]
    Workout {
        /// Position of the package in the batch
        index: usize,
        /// Workout code of the package
        code: String,
        /// Engine fault
        #[source]
        source: WorkoutError,
    },
}

/// One raw sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Three-letter workout code
    pub code: String,
    /// Positional sensor values for the kind
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package
    #[must_use]
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Build and summarize this package
    ///
    /// # Errors
    ///
    /// Propagates any fault raised by the workout factory
    pub fn summarize(&self) -> Result<TrainingSummary, WorkoutError> {
        build_workout(&self.code, &self.data).map(|workout| summarize(&workout))
    }
}

/// A package that faulted under the skip policy
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPackage {
    /// Position of the package in the batch
    pub index: usize,
    /// Workout code of the package
    pub code: String,
    /// Fault that caused the skip
    pub error: WorkoutError,
}

/// Outcome of processing a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Summaries of successful packages, in input order
    pub summaries: Vec<TrainingSummary>,
    /// Packages skipped under the skip policy, in input order
    pub skipped: Vec<SkippedPackage>,
}

impl BatchReport {
    /// Render the summaries in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails
    pub fn render(&self, format: OutputFormat) -> Result<String, BatchError> {
        match format {
            OutputFormat::Text => Ok(self
                .summaries
                .iter()
                .map(TrainingSummary::message)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.summaries)?),
        }
    }
}

/// The reference packages recorded by the tracker firmware test rig
#[must_use]
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("RUN", [420.0, 4.0, 20.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a JSON array of sensor packages from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid package array
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>, BatchError> {
    let raw = fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = packages.len(), "Loaded sensor packages");
    Ok(packages)
}

/// Build and summarize every package according to the configured policy
///
/// # Errors
///
/// Under `FailurePolicy::Abort`, returns the first fault in input order
pub fn process_packages(
    packages: &[SensorPackage],
    config: &TrackerConfig,
) -> Result<BatchReport, BatchError> {
    let outcomes: Vec<Result<TrainingSummary, WorkoutError>> =
        if config.runs_parallel(packages.len()) {
            packages.par_iter().map(SensorPackage::summarize).collect()
        } else {
            packages.iter().map(SensorPackage::summarize).collect()
        };

    let mut report = BatchReport::default();
    for (index, (package, outcome)) in packages.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(summary) => report.summaries.push(summary),
            Err(error) => match config.failure_policy {
                FailurePolicy::Abort => {
                    return Err(BatchError::Workout {
                        index,
                        code: package.code.clone(),
                        source: error,
                    });
                }
                FailurePolicy::Skip => {
                    warn!(index, code = %package.code, %error, "Skipping faulty sensor package");
                    report.skipped.push(SkippedPackage {
                        index,
                        code: package.code.clone(),
                        error,
                    });
                }
            },
        }
    }

    info!(
        processed = report.summaries.len(),
        skipped = report.skipped.len(),
        "Batch complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_packages_all_summarize() {
        let report = process_packages(&sample_packages(), &TrackerConfig::default()).unwrap();
        assert_eq!(report.summaries.len(), 4);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_text_render_is_one_line_per_summary() {
        let report = process_packages(&sample_packages(), &TrackerConfig::default()).unwrap();
        let text = report.render(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|line| line.ends_with('.')));
    }
}
