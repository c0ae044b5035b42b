// ABOUTME: Main library entry point for the training tracker
// ABOUTME: Wires the metric engine to logging, runtime configuration, and the batch driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Tracker
//!
//! Turns raw fitness tracker sensor packages into training summaries:
//! distance, mean speed, and estimated calories.
//!
//! ## Example
//!
//! ```rust
//! use training_tracker::metrics::{build_workout, summarize};
//!
//! let workout = build_workout("RUN", &[15000.0, 1.0, 75.0])?;
//! let summary = summarize(&workout);
//! assert_eq!(summary.kind_name, "Running");
//! # Ok::<(), training_tracker::metrics::WorkoutError>(())
//! ```

/// Sensor package batches and the reference dataset
pub mod batch;

/// Runtime configuration for batch processing and output
pub mod config;

/// Structured logging setup
pub mod logging;

pub use tracker_core::{constants, errors, models};
pub use tracker_metrics as metrics;
