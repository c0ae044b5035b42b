// ABOUTME: Runtime configuration for batch processing and summary output
// ABOUTME: Defaults, environment overrides, validation, and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker configuration
//!
//! Settings only shape how callers drive the engine (failure handling,
//! output format, parallelism). Formula constants are not configurable.
//!
//! | Variable | Setting |
//! |---|---|
//! | `TRACKER_FAILURE_POLICY` | `abort` or `skip` |
//! | `TRACKER_OUTPUT_FORMAT` | `text` or `json` |
//! | `TRACKER_PARALLEL_THRESHOLD` | batch size at which packages go through rayon |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static TRACKER_CONFIG: OnceLock<TrackerConfig> = OnceLock::new();

/// What to do when one package in a batch faults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first fault and return it
    #[default]
    Abort,
    /// Record the fault and continue with the next package
    Skip,
}

/// How summaries are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One fixed-template line per summary
    #[default]
    Text,
    /// Pretty-printed JSON array of summaries
    Json,
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(ConfigError::UnknownVariant {
                kind: "failure policy",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownVariant {
                kind: "output format",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Tracker runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Fault handling for batches
    pub failure_policy: FailurePolicy,
    /// Summary rendering
    pub output_format: OutputFormat,
    /// Batches with at least this many packages are processed in parallel
    pub parallel_threshold: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            output_format: OutputFormat::Text,
            parallel_threshold: 64,
        }
    }
}

impl TrackerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        TRACKER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load tracker config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the parallel threshold is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "parallel_threshold must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Whether a batch of `len` packages should be processed in parallel
    #[must_use]
    pub const fn runs_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val.parse().map_err(|_| ConfigError::Parse {
                variable: env_var_name.to_owned(),
                value: val.clone(),
            })?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("TRACKER_FAILURE_POLICY", &mut self.failure_policy)?;
        Self::apply_env_var("TRACKER_OUTPUT_FORMAT", &mut self.output_format)?;
        Self::apply_env_var(
            "TRACKER_PARALLEL_THRESHOLD",
            &mut self.parallel_threshold,
        )?;
        Ok(self)
    }
}
