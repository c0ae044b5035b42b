// ABOUTME: Typed construction parameters for each workout kind
// ABOUTME: Unpacks positional sensor values with arity and count checks at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-kind construction parameters
//!
//! Sensor packages arrive as flat positional lists. The `from_values`
//! constructors are the only place that layout is interpreted:
//!
//! | Kind | Layout |
//! |---|---|
//! | Running | action, duration, weight |
//! | Sports walking | action, duration, weight, height |
//! | Swimming | action, duration, weight, pool length, pool laps |

use serde::{Deserialize, Serialize};
use tracker_core::{WorkoutError, WorkoutKind, WorkoutResult};

/// Running workout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningParams {
    /// Number of strides
    pub action_count: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Body weight in kg
    pub weight_kg: f64,
}

/// Sports walking workout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingParams {
    /// Number of strides
    pub action_count: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
}

/// Swimming workout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimmingParams {
    /// Number of strokes
    pub action_count: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: u32,
}

impl RunningParams {
    /// Unpack `[action, duration, weight]`
    ///
    /// # Errors
    ///
    /// Returns `ArgumentMismatch` on wrong arity, `InvalidCount` if the action
    /// count is not a whole non-negative number
    pub fn from_values(values: &[f64]) -> WorkoutResult<Self> {
        let [action, duration_hours, weight_kg] = positional(WorkoutKind::Running, values)?;
        Ok(Self {
            action_count: count("action_count", action)?,
            duration_hours,
            weight_kg,
        })
    }
}

impl WalkingParams {
    /// Unpack `[action, duration, weight, height]`
    ///
    /// # Errors
    ///
    /// Returns `ArgumentMismatch` on wrong arity, `InvalidCount` if the action
    /// count is not a whole non-negative number
    pub fn from_values(values: &[f64]) -> WorkoutResult<Self> {
        let [action, duration_hours, weight_kg, height_cm] =
            positional(WorkoutKind::SportsWalking, values)?;
        Ok(Self {
            action_count: count("action_count", action)?,
            duration_hours,
            weight_kg,
            height_cm,
        })
    }
}

impl SwimmingParams {
    /// Unpack `[action, duration, weight, pool_length, pool_laps]`
    ///
    /// # Errors
    ///
    /// Returns `ArgumentMismatch` on wrong arity, `InvalidCount` if the action
    /// or lap count is not a whole non-negative number
    pub fn from_values(values: &[f64]) -> WorkoutResult<Self> {
        let [action, duration_hours, weight_kg, pool_length_m, laps] =
            positional(WorkoutKind::Swimming, values)?;
        Ok(Self {
            action_count: count("action_count", action)?,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count: count("pool_lap_count", laps)?,
        })
    }
}

/// Copy exactly `N` values out of the slice or report the arity mismatch
fn positional<const N: usize>(kind: WorkoutKind, values: &[f64]) -> WorkoutResult<[f64; N]> {
    <[f64; N]>::try_from(values)
        .map_err(|_| WorkoutError::argument_mismatch(kind.name(), N, values.len()))
}

/// Convert a sensor value into a count field
fn count(field: &'static str, value: f64) -> WorkoutResult<u32> {
    let representable = value.is_finite()
        && value >= 0.0
        && value.fract() == 0.0
        && value <= f64::from(u32::MAX);
    if !representable {
        return Err(WorkoutError::InvalidCount { field, value });
    }
    // Safe: checked whole and within u32 range above
    Ok(value as u32)
}
