// ABOUTME: Distance, mean speed, and calorie formulas for each workout kind
// ABOUTME: Pure functions over plain numbers so every formula is testable in isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout formulas
//!
//! Every speed formula returns `0.0` for a zero duration instead of dividing
//! by zero, which keeps the metric contract total.

use tracker_core::constants::{running, swimming, units, walking};

/// Distance in km covered by `action_count` actions of `step_length_m` meters
#[must_use]
pub fn distance_km(action_count: u32, step_length_m: f64) -> f64 {
    f64::from(action_count) * step_length_m / units::METERS_PER_KM
}

/// Mean speed in km/h over the whole duration
#[must_use]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

/// Mean swimming speed in km/h derived from pool geometry
///
/// Formula: `pool_length_m * pool_lap_count / 1000 / duration_hours`
#[must_use]
pub fn pool_speed_kmh(pool_length_m: f64, pool_lap_count: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    pool_length_m * f64::from(pool_lap_count) / units::METERS_PER_KM / duration_hours
}

/// Running energy expenditure in kcal
///
/// Formula: `(18 * speed - 20) * weight / 1000 * duration_minutes`
#[must_use]
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    let speed_component = running::SPEED_MULTIPLIER.mul_add(mean_speed_kmh, -running::SPEED_SHIFT);
    speed_component * weight_kg / units::METERS_PER_KM * duration_hours * units::MINUTES_PER_HOUR
}

/// Sports walking energy expenditure in kcal
///
/// Formula: `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * duration_minutes`
///
/// The speed/height quotient is floored, not divided exactly. Reference
/// outputs depend on that truncation.
#[must_use]
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let speed_height_ratio = (mean_speed_kmh.powi(2) / height_cm).floor();
    let speed_component = speed_height_ratio * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg;
    walking::WEIGHT_MULTIPLIER.mul_add(weight_kg, speed_component)
        * duration_hours
        * units::MINUTES_PER_HOUR
}

/// Swimming energy expenditure in kcal
///
/// Formula: `(speed + 1.1) * 2 * weight`
#[must_use]
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg
}
