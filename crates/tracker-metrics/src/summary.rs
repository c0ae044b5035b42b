// ABOUTME: Summary builder turning a workout into its five-field training summary
// ABOUTME: Computes distance, mean speed, and calories once and echoes the duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;
use tracker_core::TrainingSummary;

use crate::workout::Workout;

/// Build the training summary for a workout
#[must_use]
pub fn summarize(workout: &Workout) -> TrainingSummary {
    let summary = TrainingSummary {
        kind_name: workout.kind().name().to_owned(),
        duration_hours: workout.duration_hours(),
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh(),
        calories_kcal: workout.spent_calories(),
    };

    debug!(
        kind = %summary.kind_name,
        distance_km = summary.distance_km,
        mean_speed_kmh = summary.mean_speed_kmh,
        calories_kcal = summary.calories_kcal,
        "Workout summarized"
    );

    summary
}

/// Build summaries for a list of workouts, preserving order
#[must_use]
pub fn summarize_all(workouts: &[Workout]) -> Vec<TrainingSummary> {
    workouts.iter().map(summarize).collect()
}
