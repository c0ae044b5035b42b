// ABOUTME: Core types and constants for the training tracker engine
// ABOUTME: Foundation crate with error taxonomy, workout kinds, formula constants, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the training
//! tracker. The metric engine and the batch driver both build on it.
//!
//! ## Modules
//!
//! - **errors**: `WorkoutError` taxonomy with stable `ErrorCode` classification
//! - **constants**: Step lengths, unit conversions, and calorie coefficients
//! - **models**: `WorkoutKind` discriminator and the `TrainingSummary` record

/// Error taxonomy shared by the engine and its callers
pub mod errors;

/// Formula constants organized by workout kind
pub mod constants;

/// Workout kind discriminator and training summary record
pub mod models;

pub use errors::{ErrorCode, WorkoutError, WorkoutResult};
pub use models::{TrainingSummary, WorkoutKind};
