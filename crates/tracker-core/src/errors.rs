// ABOUTME: Error taxonomy for workout construction and metric computation
// ABOUTME: Defines WorkoutError variants and their stable ErrorCode classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Error Types
//!
//! Every fault the engine can raise is a `WorkoutError`. None of them is
//! recovered internally: the engine has no side effects to roll back, so the
//! caller decides whether to abort or skip.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used for workout faults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input classification (3000-3999)
    /// Workout code is not one of the known kinds
    UnrecognizedKind = 3000,
    /// Positional data has the wrong number of values
    ArgumentMismatch = 3001,
    /// A count field received a non-integral or negative value
    InvalidCount = 3002,

    // Formula contract (9000-9999)
    /// Calorie formula requested from the base record
    UnimplementedFormula = 9000,
}

impl ErrorCode {
    /// Short human-readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnrecognizedKind => "The workout code is not recognized",
            Self::ArgumentMismatch => "The sensor data does not match the workout layout",
            Self::InvalidCount => "A count field must be a non-negative whole number",
            Self::UnimplementedFormula => "No calorie formula is defined for this workout",
        }
    }
}

/// Faults raised while building a workout or computing its metrics
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The workout code matches none of the known kinds
    #[error("Unrecognized workout kind: '{code}'")]
    UnrecognizedKind {
        /// Code as received from the caller
        code: String,
    },

    /// Calorie computation was requested on a record without a kind formula
    #[error("Calorie formula is not implemented for {kind}")]
    UnimplementedFormula {
        /// Name of the record type that lacks a formula
        kind: &'static str,
    },

    /// Positional data has the wrong arity for the selected kind
    #[error("{kind} expects {expected} values, got {actual}")]
    ArgumentMismatch {
        /// Name of the selected workout kind
        kind: &'static str,
        /// Number of values the kind requires
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A count field cannot be represented as a whole count
    #[error("Field '{field}' must be a non-negative whole number, got {value}")]
    InvalidCount {
        /// Name of the count field
        field: &'static str,
        /// Value as received from the caller
        value: f64,
    },
}

impl WorkoutError {
    /// Create an "unrecognized kind" error
    #[must_use]
    pub fn unrecognized_kind(code: impl Into<String>) -> Self {
        Self::UnrecognizedKind { code: code.into() }
    }

    /// Create an "argument mismatch" error
    #[must_use]
    pub const fn argument_mismatch(kind: &'static str, expected: usize, actual: usize) -> Self {
        Self::ArgumentMismatch {
            kind,
            expected,
            actual,
        }
    }

    /// Classification code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedKind { .. } => ErrorCode::UnrecognizedKind,
            Self::UnimplementedFormula { .. } => ErrorCode::UnimplementedFormula,
            Self::ArgumentMismatch { .. } => ErrorCode::ArgumentMismatch,
            Self::InvalidCount { .. } => ErrorCode::InvalidCount,
        }
    }
}

/// Result alias for workout operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;
