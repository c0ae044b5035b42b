// ABOUTME: Core data models for workout classification and training summaries
// ABOUTME: Re-exports WorkoutKind and TrainingSummary

//! Core data models

/// Workout kind discriminator with code parsing
pub mod workout_kind;

/// Immutable training summary record and its fixed-template rendering
pub mod summary;

pub use summary::TrainingSummary;
pub use workout_kind::WorkoutKind;
