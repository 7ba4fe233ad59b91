//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_rating::{DriverProfile, KnowledgeBase, ProfileError};
use rust_decimal::Decimal;

use crate::fixtures::StringFixtures;

/// Builder for constructing test driver profiles
pub struct DriverProfileBuilder {
    age: u32,
    vehicle_make: String,
    vehicle_model: String,
    accident_count: u32,
}

impl Default for DriverProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverProfileBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 30,
            vehicle_make: StringFixtures::sedan_make().to_string(),
            vehicle_model: StringFixtures::sedan_model().to_string(),
            accident_count: 0,
        }
    }

    /// Sets the driver age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the vehicle make
    pub fn with_vehicle_make(mut self, make: impl Into<String>) -> Self {
        self.vehicle_make = make.into();
        self
    }

    /// Sets the vehicle model
    pub fn with_vehicle_model(mut self, model: impl Into<String>) -> Self {
        self.vehicle_model = model.into();
        self
    }

    /// Sets the accident count
    pub fn with_accident_count(mut self, count: u32) -> Self {
        self.accident_count = count;
        self
    }

    /// Starts from a teen driver in the 16-19 bracket
    pub fn teen() -> Self {
        Self::new().with_age(18)
    }

    /// Starts from a senior driver in the 66+ bracket
    pub fn senior() -> Self {
        Self::new().with_age(70)
    }

    /// Builds the driver profile
    ///
    /// # Panics
    ///
    /// Panics if the accumulated fields fail profile validation. Use
    /// [`try_build`](Self::try_build) when the test exercises the
    /// validation path itself.
    pub fn build(self) -> DriverProfile {
        self.try_build().expect("Builder produced an invalid profile")
    }

    /// Builds the driver profile, surfacing validation errors
    pub fn try_build(self) -> Result<DriverProfile, ProfileError> {
        DriverProfile::new(
            self.age,
            self.vehicle_make,
            self.vehicle_model,
            self.accident_count,
        )
    }
}

/// Builder for constructing bespoke rate tables
pub struct RateTableBuilder {
    table: KnowledgeBase,
}

impl Default for RateTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTableBuilder {
    /// Creates an empty rate table builder
    pub fn new() -> Self {
        Self {
            table: KnowledgeBase::new(),
        }
    }

    /// Starts from the standard rate table
    pub fn standard() -> Self {
        Self {
            table: KnowledgeBase::standard(),
        }
    }

    /// Adds a base rate entry for a vehicle category segment
    pub fn with_base_rate(mut self, segment: &str, rate: Decimal) -> Self {
        self.table.insert(format!("baseRate.{}", segment), rate);
        self
    }

    /// Adds an age factor entry for a bracket
    pub fn with_age_factor(mut self, bracket: &str, factor: Decimal) -> Self {
        self.table.insert(format!("ageFactor.{}", bracket), factor);
        self
    }

    /// Adds an accident surcharge entry for a count
    pub fn with_accident_surcharge(mut self, count: &str, surcharge: Decimal) -> Self {
        self.table
            .insert(format!("accidentSurcharge.{}", count), surcharge);
        self
    }

    /// Adds a raw entry under an arbitrary key
    pub fn with_entry(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.table.insert(key, value);
        self
    }

    /// Builds the rate table
    pub fn build(self) -> KnowledgeBase {
        self.table
    }
}
