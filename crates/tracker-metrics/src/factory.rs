// ABOUTME: Workout factory mapping firmware codes and positional data to workouts
// ABOUTME: Fails loudly on unknown codes and arity mismatches, never falls back to a blank workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};
use tracker_core::{WorkoutError, WorkoutKind, WorkoutResult};

use crate::params::{RunningParams, SwimmingParams, WalkingParams};
use crate::workout::Workout;

/// Build a workout from a firmware code and its positional sensor values
///
/// Recognized codes are `"SWM"`, `"RUN"` and `"WLK"`.
///
/// # Errors
///
/// - `UnrecognizedKind` if `code` is not one of the known codes
/// - `ArgumentMismatch` if `data` has the wrong length for the kind
/// - `InvalidCount` if a count field is not a whole non-negative number
pub fn build_workout(code: &str, data: &[f64]) -> WorkoutResult<Workout> {
    let kind = WorkoutKind::from_code(code).inspect_err(|_| {
        warn!(code, "Rejected sensor package with unrecognized workout code");
    })?;
    build_workout_of_kind(kind, data)
}

/// Build a workout of an already resolved kind from positional sensor values
///
/// # Errors
///
/// Returns `ArgumentMismatch` or `InvalidCount` when `data` does not match
/// the kind's layout
pub fn build_workout_of_kind(kind: WorkoutKind, data: &[f64]) -> WorkoutResult<Workout> {
    debug!(kind = %kind, values = data.len(), "Building workout");

    let workout = match kind {
        WorkoutKind::Running => Workout::running(RunningParams::from_values(data)?),
        WorkoutKind::SportsWalking => Workout::walking(WalkingParams::from_values(data)?),
        WorkoutKind::Swimming => Workout::swimming(SwimmingParams::from_values(data)?),
    };

    Ok(workout)
}

/// Build from a `(code, data)` sensor package pair
impl TryFrom<(&str, &[f64])> for Workout {
    type Error = WorkoutError;

    fn try_from((code, data): (&str, &[f64])) -> Result<Self, Self::Error> {
        build_workout(code, data)
    }
}
