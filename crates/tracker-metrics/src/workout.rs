// ABOUTME: Workout record types with per-kind distance, speed, and calorie dispatch
// ABOUTME: TrainingBase holds shared fields; Workout pairs it with a closed per-kind payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout records
//!
//! A [`Workout`] is a [`TrainingBase`] (fields every kind shares) plus a
//! [`WorkoutDetails`] payload holding the kind-specific extras. Metrics are
//! computed on demand by matching on the payload, so a workout never carries
//! stale or shared derived state.

use serde::{Deserialize, Serialize};
use tracker_core::{WorkoutError, WorkoutKind, WorkoutResult};

use crate::formulas;
use crate::params::{RunningParams, SwimmingParams, WalkingParams};

/// Fields and default formulas shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingBase {
    /// Number of strides or strokes
    pub action_count: u32,
    /// Duration in hours
    pub duration_hours: f64,
    /// Body weight in kg
    pub weight_kg: f64,
}

impl TrainingBase {
    /// Name reported for the bare base record
    pub const NAME: &'static str = "Training";

    /// Create a base record
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Distance in km for the given per-action step length
    #[must_use]
    pub fn distance_km(&self, step_length_m: f64) -> f64 {
        formulas::distance_km(self.action_count, step_length_m)
    }

    /// Distance-derived mean speed in km/h, zero for a zero duration
    #[must_use]
    pub fn mean_speed_kmh(&self, step_length_m: f64) -> f64 {
        formulas::mean_speed_kmh(self.distance_km(step_length_m), self.duration_hours)
    }

    /// The base record has no calorie model of its own
    ///
    /// # Errors
    ///
    /// Always returns `WorkoutError::UnimplementedFormula`
    pub const fn spent_calories(&self) -> WorkoutResult<f64> {
        Err(WorkoutError::UnimplementedFormula { kind: Self::NAME })
    }
}

/// Kind-specific payload of a workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutDetails {
    /// Running has no extras
    Running,
    /// Sports walking
    SportsWalking {
        /// Height in cm
        height_cm: f64,
    },
    /// Pool swimming
    Swimming {
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_lap_count: u32,
    },
}

/// A fully specified workout of one of the supported kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    base: TrainingBase,
    details: WorkoutDetails,
}

impl Workout {
    /// Build a running workout
    #[must_use]
    pub const fn running(params: RunningParams) -> Self {
        Self {
            base: TrainingBase::new(params.action_count, params.duration_hours, params.weight_kg),
            details: WorkoutDetails::Running,
        }
    }

    /// Build a sports walking workout
    #[must_use]
    pub const fn walking(params: WalkingParams) -> Self {
        Self {
            base: TrainingBase::new(params.action_count, params.duration_hours, params.weight_kg),
            details: WorkoutDetails::SportsWalking {
                height_cm: params.height_cm,
            },
        }
    }

    /// Build a swimming workout
    #[must_use]
    pub const fn swimming(params: SwimmingParams) -> Self {
        Self {
            base: TrainingBase::new(params.action_count, params.duration_hours, params.weight_kg),
            details: WorkoutDetails::Swimming {
                pool_length_m: params.pool_length_m,
                pool_lap_count: params.pool_lap_count,
            },
        }
    }

    /// Kind discriminator
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running => WorkoutKind::Running,
            WorkoutDetails::SportsWalking { .. } => WorkoutKind::SportsWalking,
            WorkoutDetails::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Shared fields
    #[must_use]
    pub const fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Kind-specific payload
    #[must_use]
    pub const fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.base.duration_hours
    }

    /// Distance in km using this kind's step length
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(self.kind().step_length_m())
    }

    /// Mean speed in km/h
    ///
    /// Swimming derives speed from pool geometry; the other kinds divide
    /// distance by duration.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.details {
            WorkoutDetails::Swimming {
                pool_length_m,
                pool_lap_count,
            } => formulas::pool_speed_kmh(pool_length_m, pool_lap_count, self.base.duration_hours),
            WorkoutDetails::Running | WorkoutDetails::SportsWalking { .. } => {
                self.base.mean_speed_kmh(self.kind().step_length_m())
            }
        }
    }

    /// Energy spent in kcal using this kind's calorie formula
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let TrainingBase {
            duration_hours,
            weight_kg,
            ..
        } = self.base;

        match self.details {
            WorkoutDetails::Running => formulas::running_calories(speed, weight_kg, duration_hours),
            WorkoutDetails::SportsWalking { height_cm } => {
                formulas::walking_calories(speed, weight_kg, height_cm, duration_hours)
            }
            WorkoutDetails::Swimming { .. } => formulas::swimming_calories(speed, weight_kg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn swim(duration_hours: f64) -> Workout {
        Workout::swimming(SwimmingParams {
            action_count: 720,
            duration_hours,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_lap_count: 40,
        })
    }

    #[test]
    fn test_base_record_has_no_calorie_formula() {
        let base = TrainingBase::new(1000, 1.0, 70.0);
        assert_eq!(
            base.spent_calories(),
            Err(WorkoutError::UnimplementedFormula { kind: "Training" })
        );
    }

    #[test]
    fn test_swimming_speed_ignores_stroke_distance() {
        let workout = swim(1.0);
        assert!((workout.distance_km() - 0.9936).abs() < EPS);
        assert!((workout.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((workout.spent_calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_speed_is_zero_for_every_kind() {
        assert_eq!(swim(0.0).mean_speed_kmh(), 0.0);

        let run = Workout::running(RunningParams {
            action_count: 15000,
            duration_hours: 0.0,
            weight_kg: 75.0,
        });
        assert_eq!(run.mean_speed_kmh(), 0.0);
        assert_eq!(run.spent_calories(), 0.0);

        let walk = Workout::walking(WalkingParams {
            action_count: 9000,
            duration_hours: 0.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        });
        assert_eq!(walk.mean_speed_kmh(), 0.0);
    }

    #[test]
    fn test_kind_follows_payload() {
        assert_eq!(swim(1.0).kind(), WorkoutKind::Swimming);
        assert_eq!(swim(1.0).duration_hours(), 1.0);
    }
}
