// ABOUTME: Workout metric engine computing distance, mean speed, and calories
// ABOUTME: Provides workout variants, the code-driven factory, and the summary builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Metrics
//!
//! Pure, synchronous computation from a sensor package to a training summary:
//!
//! ```text
//! (code, [values]) -> build_workout -> Workout -> summarize -> TrainingSummary
//! ```
//!
//! Nothing in this crate holds shared state, so callers may process packages
//! on as many threads as they like.

/// Calorie, distance, and speed formulas as free functions
pub mod formulas;

/// Typed per-kind construction parameters and positional unpacking
pub mod params;

/// Shared base record and the closed `Workout` variant type
pub mod workout;

/// Code-driven workout factory
pub mod factory;

/// Summary builder
pub mod summary;

pub use factory::{build_workout, build_workout_of_kind};
pub use params::{RunningParams, SwimmingParams, WalkingParams};
pub use summary::{summarize, summarize_all};
pub use tracker_core::{ErrorCode, TrainingSummary, WorkoutError, WorkoutKind, WorkoutResult};
pub use workout::{TrainingBase, Workout, WorkoutDetails};
