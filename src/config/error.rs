// ABOUTME: Configuration error types for tracker runtime settings
// ABOUTME: Defines error variants for unparsable environment values and failed validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds a value that does not parse
    #[error("Invalid value '{value}' for {variable}")]
    Parse {
        /// Name of the environment variable
        variable: String,
        /// Raw value found in the environment
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Unknown enumeration value
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant {
        /// Which setting was being parsed
        kind: &'static str,
        /// Raw value that matched no variant
        value: String,
    },
}
