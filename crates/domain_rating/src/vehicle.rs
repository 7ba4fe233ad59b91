//! Vehicle classification
//!
//! Maps a vehicle make/model onto the rating category that keys the
//! base-rate table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Makes that always rate as luxury
const LUXURY_MAKES: [&str; 4] = ["bmw", "mercedes", "lexus", "audi"];

/// Marks that rate as sports; mixes marque names (ferrari, porsche) with
/// model names sold under mainstream makes (mustang, corvette), so both
/// fields are checked against it
const SPORTS_MARKS: [&str; 4] = ["ferrari", "porsche", "mustang", "corvette"];

/// Models that rate as SUV when no luxury or sports match applies
const SUV_MODELS: [&str; 4] = ["suv", "explorer", "tahoe", "highlander"];

/// Rating category for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Luxury,
    Sports,
}

impl VehicleCategory {
    /// Returns the segment used in `baseRate.<segment>` rate table keys
    pub fn rate_key_segment(&self) -> &'static str {
        match self {
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Sports => "sports",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rate_key_segment())
    }
}

/// Classifies a vehicle by make and model
///
/// Matching is exact and case-sensitive; callers supply already-normalized
/// (lowercase) strings, or classification silently falls through to
/// `Sedan`. The luxury and sports checks take precedence over the
/// model-based SUV check, so a luxury make with an SUV model still rates
/// as luxury. Classification is total: every input pair maps to exactly
/// one category.
pub fn classify(make: &str, model: &str) -> VehicleCategory {
    if LUXURY_MAKES.contains(&make) {
        return VehicleCategory::Luxury;
    }

    if SPORTS_MARKS.contains(&make) || SPORTS_MARKS.contains(&model) {
        return VehicleCategory::Sports;
    }

    if SUV_MODELS.contains(&model) {
        return VehicleCategory::Suv;
    }

    VehicleCategory::Sedan
}
