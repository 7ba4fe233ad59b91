//! Quote DTOs
//!
//! The request DTO carries the profile fields and enforces the same
//! bounds the domain constructor does, so obviously bad input is
//! rejected with field-level detail before a profile is ever built.
//! The response DTO is the presentation of a priced premium: amounts
//! are rescaled to the currency's display precision and identifiers
//! are rendered with their prefixes.

use chrono::{DateTime, Utc};
use core_kernel::{CalculationId, Currency, Money, QuoteId};
use domain_rating::{classify, DriverProfile, Premium, VehicleCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for rating a driver profile
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    /// Driver age in whole years
    #[validate(range(min = 16, max = 120, message = "age must be between 16 and 120"))]
    pub age: u32,

    /// Vehicle manufacturer, matched exactly against the rating lists
    #[validate(length(min = 1, message = "vehicle_make must not be empty"))]
    pub vehicle_make: String,

    /// Vehicle model, matched exactly against the rating lists
    #[validate(length(min = 1, message = "vehicle_model must not be empty"))]
    pub vehicle_model: String,

    /// At-fault accidents in the last five years
    #[validate(range(max = 99, message = "accident_count cannot exceed 99"))]
    pub accident_count: u32,
}

/// A single line of the quote breakdown
#[derive(Debug, Serialize)]
pub struct AdjustmentDto {
    pub label: String,
    pub amount: Decimal,
    pub explanation: String,
}

/// Response body for a priced quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: String,
    pub calculation_id: String,
    pub vehicle_category: VehicleCategory,
    pub currency: Currency,
    pub base_rate: Decimal,
    pub adjustments: Vec<AdjustmentDto>,
    pub total: Decimal,
    pub rated_at: DateTime<Utc>,
}

impl QuoteResponse {
    /// Builds the response from a priced premium
    pub fn from_premium(
        quote_id: QuoteId,
        calculation_id: CalculationId,
        profile: &DriverProfile,
        premium: &Premium,
    ) -> Self {
        Self {
            quote_id: quote_id.to_string(),
            calculation_id: calculation_id.to_string(),
            vehicle_category: classify(profile.vehicle_make(), profile.vehicle_model()),
            currency: premium.currency(),
            base_rate: display_amount(&premium.base_rate()),
            adjustments: premium
                .adjustments()
                .iter()
                .map(|adjustment| AdjustmentDto {
                    label: adjustment.label.clone(),
                    amount: display_amount(&adjustment.amount),
                    explanation: adjustment.explanation.clone(),
                })
                .collect(),
            total: display_amount(&premium.total()),
            rated_at: Utc::now(),
        }
    }
}

/// Rounds and rescales an amount to its currency's display precision
///
/// Rescaling pins the serialized form: a USD amount always renders with
/// two decimal places regardless of the scale the arithmetic produced.
fn display_amount(money: &Money) -> Decimal {
    let places = money.currency().decimal_places();
    let mut amount = money.round_to_currency().amount();
    amount.rescale(places);
    amount
}
