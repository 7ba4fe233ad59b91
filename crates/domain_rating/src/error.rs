//! Rating domain errors
//!
//! This module defines all error types that can occur while constructing
//! a profile or rating it.

use thiserror::Error;

/// Errors that can occur during a premium calculation
///
/// Any of these aborts the calculation that raised it; the engine never
/// returns a partial or defaulted premium.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    /// A rule action dereferenced a rate table key that was never populated
    #[error("Unknown rate table key: {key}")]
    UnknownKey { key: String },
}

impl RatingError {
    /// Creates an unknown-key error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        RatingError::UnknownKey { key: key.into() }
    }
}

/// Errors raised while constructing a driver profile
///
/// Validation happens at the profile boundary; the engine assumes
/// validated input and never re-checks it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// Driver age is outside the insurable range
    #[error("Driver age {age} is outside the insurable range {min}-{max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    /// Accident count exceeds what the book will rate
    #[error("Accident count {count} exceeds the rateable maximum of {max}")]
    TooManyAccidents { count: u32, max: u32 },

    /// A required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl ProfileError {
    /// Creates a missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ProfileError::MissingRequiredField(field.into())
    }
}
