//! Driver profiles
//!
//! The profile is the engine's input value object. Construction validates
//! the ranges the rate tables cover; once built, a profile is immutable
//! and the engine never re-checks it.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// An applicant's rating profile
///
/// Make and model are matched case-sensitively against the classifier
/// lists, so callers supply already-normalized (lowercase) strings; the
/// profile itself performs no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    age: u32,
    vehicle_make: String,
    vehicle_model: String,
    accident_count: u32,
}

impl DriverProfile {
    /// Youngest age the rate tables cover
    pub const MIN_AGE: u32 = 16;
    /// Oldest age the book will quote
    pub const MAX_AGE: u32 = 120;
    /// Largest accident count accepted as plausible input
    pub const MAX_ACCIDENTS: u32 = 99;

    /// Creates a validated profile
    ///
    /// # Arguments
    ///
    /// * `age` - Driver age in whole years
    /// * `vehicle_make` - Vehicle make (e.g. "toyota")
    /// * `vehicle_model` - Vehicle model (e.g. "camry")
    /// * `accident_count` - Accidents in the last five years
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if the age falls outside 16-120, the
    /// accident count exceeds 99, or make/model are blank.
    pub fn new(
        age: u32,
        vehicle_make: impl Into<String>,
        vehicle_model: impl Into<String>,
        accident_count: u32,
    ) -> Result<Self, ProfileError> {
        if age < Self::MIN_AGE || age > Self::MAX_AGE {
            return Err(ProfileError::AgeOutOfRange {
                age,
                min: Self::MIN_AGE,
                max: Self::MAX_AGE,
            });
        }

        if accident_count > Self::MAX_ACCIDENTS {
            return Err(ProfileError::TooManyAccidents {
                count: accident_count,
                max: Self::MAX_ACCIDENTS,
            });
        }

        let vehicle_make = vehicle_make.into();
        if vehicle_make.trim().is_empty() {
            return Err(ProfileError::missing_field("vehicle_make"));
        }

        let vehicle_model = vehicle_model.into();
        if vehicle_model.trim().is_empty() {
            return Err(ProfileError::missing_field("vehicle_model"));
        }

        Ok(Self {
            age,
            vehicle_make,
            vehicle_model,
            accident_count,
        })
    }

    /// Returns the driver's age in years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the vehicle make
    pub fn vehicle_make(&self) -> &str {
        &self.vehicle_make
    }

    /// Returns the vehicle model
    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    /// Returns the number of accidents in the last five years
    pub fn accident_count(&self) -> u32 {
        self.accident_count
    }
}
