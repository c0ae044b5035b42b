// ABOUTME: Workout kind enumeration for tracker sensor packages
// ABOUTME: Maps three-letter firmware codes to kinds and exposes per-kind layout and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{step_length, workout_codes};
use crate::errors::WorkoutError;

/// Enumeration of supported workout kinds
///
/// The set is closed: the tracker firmware only ever emits these three codes,
/// and anything else is rejected rather than mapped to a fallback kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running, stride-based distance
    Running,
    /// Sports walking, stride-based distance with a height-scaled calorie term
    SportsWalking,
    /// Pool swimming, speed derived from pool geometry
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in firmware code table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a kind from its three-letter firmware code
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::UnrecognizedKind` if the code is not known
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            workout_codes::RUNNING => Ok(Self::Running),
            workout_codes::WALKING => Ok(Self::SportsWalking),
            workout_codes::SWIMMING => Ok(Self::Swimming),
            other => Err(WorkoutError::unrecognized_kind(other)),
        }
    }

    /// Three-letter firmware code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Stable human-readable name used in training summaries
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional sensor values this kind is built from
    #[must_use]
    pub const fn expected_arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Distance covered per action in meters
    #[must_use]
    pub const fn step_length_m(self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => step_length::STRIDE_M,
            Self::Swimming => step_length::STROKE_M,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_lookup() {
        for kind in WorkoutKind::ALL {
            assert_eq!(WorkoutKind::from_code(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            "XYZ".parse::<WorkoutKind>(),
            Err(WorkoutError::unrecognized_kind("XYZ"))
        );
        // Codes are case-sensitive firmware identifiers
        assert!(WorkoutKind::from_code("run").is_err());
    }

    #[test]
    fn test_step_lengths() {
        assert_eq!(WorkoutKind::Running.step_length_m(), 0.65);
        assert_eq!(WorkoutKind::SportsWalking.step_length_m(), 0.65);
        assert_eq!(WorkoutKind::Swimming.step_length_m(), 1.38);
    }
}
