//! Quote handlers

use axum::{extract::State, Json};
use core_kernel::{CalculationId, QuoteId};
use domain_rating::DriverProfile;
use tracing::info;
use validator::Validate;

use crate::dto::quote::{QuoteRequest, QuoteResponse};
use crate::error::ApiError;
use crate::AppState;

/// Rates a driver profile and returns the priced quote
///
/// Validation happens twice on purpose: the DTO layer rejects
/// out-of-range fields with per-field detail, and the domain constructor
/// enforces the same bounds for callers that bypass HTTP.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;

    let profile = DriverProfile::new(
        request.age,
        request.vehicle_make,
        request.vehicle_model,
        request.accident_count,
    )?;

    let premium = state.engine.calculate_premium(&profile)?;

    let quote_id = QuoteId::new_v7();
    let calculation_id = CalculationId::new_v7();
    info!(
        quote = %quote_id,
        calculation = %calculation_id,
        total = %premium.total(),
        "quote rated"
    );

    Ok(Json(QuoteResponse::from_premium(
        quote_id,
        calculation_id,
        &profile,
        &premium,
    )))
}
