// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Step lengths, unit conversions, and calorie coefficients for each workout kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Formula constants are grouped by the workout kind that owns them. The
//! calorie coefficients are calibrated burn-rate values and must not be
//! rounded or reordered.

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Distance covered by one action (stride or stroke), in meters
pub mod step_length {
    /// Running and walking stride length
    pub const STRIDE_M: f64 = 0.65;
    /// Swimming stroke length
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie formula: `(18 * speed - 20) * weight / 1000 * minutes`
pub mod running {
    /// Multiplier applied to mean speed
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking formula: `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * minutes`
pub mod walking {
    /// Weight coefficient of the base burn term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight coefficient of the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming formula: `(speed + 1.1) * 2 * weight`
pub mod swimming {
    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Three-letter workout codes emitted by the tracker firmware
pub mod workout_codes {
    /// Running
    pub const RUNNING: &str = "RUN";
    /// Sports walking
    pub const WALKING: &str = "WLK";
    /// Pool swimming
    pub const SWIMMING: &str = "SWM";
}

/// Service identification for structured logging
pub mod service_names {
    /// Default service name
    pub const TRAINING_TRACKER: &str = "training-tracker";
}
