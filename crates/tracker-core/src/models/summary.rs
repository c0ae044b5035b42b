// ABOUTME: Training summary record produced once per workout
// ABOUTME: Renders the fixed-template message consumed by displays and logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-field summary of a completed workout
///
/// The rendered form (`Display` / [`TrainingSummary::message`]) is a
/// compatibility surface: labels, units, separators, and the three-decimal
/// precision are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Workout kind name (e.g. "Running"), not the firmware code
    pub kind_name: String,
    /// Duration in hours, echoed from the input
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kcal
    pub calories_kcal: f64,
}

impl TrainingSummary {
    /// Render the summary using the fixed display template
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
