//! Quote API Integration Tests
//!
//! This module exercises the HTTP surface end to end: requests are
//! dispatched through the full router with `tower::ServiceExt::oneshot`,
//! so routing, extraction, validation, rating, and serialization are all
//! covered without binding a socket.
//!
//! # Test Coverage
//!
//! ## Quotes
//! - Canonical profiles rate to their expected totals
//! - Breakdown lines carry labels, amounts, and explanations
//! - Identifiers render with their prefixes
//!
//! ## Rejection
//! - DTO validation failures return 422 with field-level detail
//! - Domain validation failures return 422 with the profile error
//! - Rate table gaps return 500 naming the missing key
//!
//! ## Operations
//! - Liveness and readiness endpoints
//! - Quoting currency follows the engine
//!
//! # Test Organization
//!
//! - `quote_tests` - Happy-path quotes through the full stack
//! - `validation_tests` - Request bodies the API must reject
//! - `failure_tests` - Server-side rating failures
//! - `health_tests` - Liveness and readiness endpoints
//! - `currency_tests` - Non-USD quoting books

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use domain_rating::RatingEngine;
use interface_api::{config::ApiConfig, create_router};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Builds a router over the standard rate table quoting in USD
fn standard_router() -> Router {
    router_with_engine(RatingEngine::new())
}

/// Builds a router over a caller-supplied engine
fn router_with_engine(engine: RatingEngine) -> Router {
    create_router(Arc::new(engine), ApiConfig::default())
}

/// Builds a POST /api/v1/quotes request with a JSON body
fn quote_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/quotes")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Reads a response body as JSON
async fn response_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}

// ============================================================================
// QUOTE TESTS
// ============================================================================

mod quote_tests {
    use super::*;

    /// Verifies a clean adult sedan quote rates at the flat base rate
    #[tokio::test]
    async fn test_adult_sedan_quote() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["vehicle_category"], json!("sedan"));
        assert_eq!(payload["currency"], json!("USD"));
        assert_eq!(payload["base_rate"], json!("1000.00"));
        assert_eq!(payload["total"], json!("1000.00"));
    }

    /// Verifies a teen luxury quote doubles the luxury base rate
    #[tokio::test]
    async fn test_teen_luxury_quote() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 18,
                "vehicle_make": "bmw",
                "vehicle_model": "x5",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["vehicle_category"], json!("luxury"));
        assert_eq!(payload["base_rate"], json!("1500.00"));
        assert_eq!(payload["total"], json!("3000.00"));
    }

    /// Verifies a senior repeat-accident quote carries the full breakdown
    #[tokio::test]
    async fn test_senior_quote_breakdown() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 70,
                "vehicle_make": "honda",
                "vehicle_model": "civic",
                "accident_count": 2,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["base_rate"], json!("1000.00"));
        assert_eq!(payload["total"], json!("1900.00"));

        let adjustments = payload["adjustments"]
            .as_array()
            .expect("adjustments array");
        assert_eq!(adjustments.len(), 2, "Expected two breakdown lines");

        assert_eq!(adjustments[0]["label"], json!("Age Factor"));
        assert_eq!(adjustments[0]["amount"], json!("300.00"));
        assert_eq!(
            adjustments[0]["explanation"],
            json!("Slight increase for senior drivers"),
        );

        assert_eq!(adjustments[1]["label"], json!("Accident History"));
        assert_eq!(adjustments[1]["amount"], json!("600.00"));
        assert_eq!(
            adjustments[1]["explanation"],
            json!("Surcharge applied for accidents within the past five years"),
        );
    }

    /// Verifies a clean record produces no accident line but keeps the
    /// zero-amount age line
    #[tokio::test]
    async fn test_clean_record_breakdown() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        let payload = response_json(response).await;
        let adjustments = payload["adjustments"]
            .as_array()
            .expect("adjustments array");

        assert_eq!(adjustments.len(), 1, "Expected only the age line");
        assert_eq!(adjustments[0]["label"], json!("Age Factor"));
        assert_eq!(adjustments[0]["amount"], json!("0.00"));
    }

    /// Verifies response identifiers render with their prefixes
    #[tokio::test]
    async fn test_quote_identifiers_carry_prefixes() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        let payload = response_json(response).await;
        let quote_id = payload["quote_id"].as_str().expect("quote_id");
        let calculation_id = payload["calculation_id"].as_str().expect("calculation_id");

        assert!(quote_id.starts_with("QTE-"), "Got quote_id {quote_id}");
        assert!(
            calculation_id.starts_with("CALC-"),
            "Got calculation_id {calculation_id}",
        );
        assert!(payload.get("rated_at").is_some());
    }
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

mod validation_tests {
    use super::*;

    /// Verifies an underage request is rejected with field-level detail
    #[tokio::test]
    async fn test_underage_request_rejected() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 15,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = response_json(response).await;
        assert_eq!(payload["error"], json!("validation_error"));

        let details = payload["details"].as_array().expect("details array");
        assert!(
            details
                .iter()
                .any(|detail| detail.as_str().is_some_and(|s| s.contains("age"))),
            "Expected an age detail, got {details:?}",
        );
    }

    /// Verifies an empty make is rejected at the DTO layer
    #[tokio::test]
    async fn test_empty_make_rejected() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = response_json(response).await;
        assert_eq!(payload["error"], json!("validation_error"));
    }

    /// Verifies a whitespace-only make passes DTO length checks but is
    /// rejected by the domain constructor
    #[tokio::test]
    async fn test_whitespace_make_rejected_by_domain() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "   ",
                "vehicle_model": "camry",
                "accident_count": 0,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = response_json(response).await;
        assert_eq!(payload["error"], json!("invalid_profile"));
        assert_eq!(
            payload["message"],
            json!("Missing required field: vehicle_make"),
        );
    }

    /// Verifies an accident count over the rateable maximum is rejected
    #[tokio::test]
    async fn test_excess_accidents_rejected() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 100,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = response_json(response).await;
        assert_eq!(payload["error"], json!("validation_error"));
    }

    /// Verifies a body missing a required field is rejected by extraction
    #[tokio::test]
    async fn test_missing_field_rejected() {
        let response = standard_router()
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// FAILURE TESTS
// ============================================================================

mod failure_tests {
    use super::*;
    use test_utils::TableFixtures;

    /// Verifies a rate table gap surfaces as a 500 naming the missing key
    #[tokio::test]
    async fn test_missing_surcharge_key_is_internal_error() {
        let engine = RatingEngine::with_knowledge_base(TableFixtures::base_rates_only());

        let response = router_with_engine(engine)
            .oneshot(quote_request(json!({
                "age": 30,
                "vehicle_make": "toyota",
                "vehicle_model": "camry",
                "accident_count": 1,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = response_json(response).await;
        assert_eq!(payload["error"], json!("internal_error"));

        let message = payload["message"].as_str().expect("message");
        assert!(
            message.contains("accidentSurcharge.1"),
            "Expected the missing key in {message}",
        );
    }
}

// ============================================================================
// HEALTH TESTS
// ============================================================================

mod health_tests {
    use super::*;
    use domain_rating::KnowledgeBase;

    /// Verifies the liveness endpoint always reports healthy
    #[tokio::test]
    async fn test_health_endpoint() {
        let response = standard_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["status"], json!("healthy"));
    }

    /// Verifies readiness passes once the rate table is loaded
    #[tokio::test]
    async fn test_readiness_with_standard_table() {
        let response = standard_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["status"], json!("ready"));
    }

    /// Verifies readiness fails against an empty rate table
    #[tokio::test]
    async fn test_readiness_with_empty_table() {
        let engine = RatingEngine::with_knowledge_base(KnowledgeBase::new());

        let response = router_with_engine(engine)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

// ============================================================================
// CURRENCY TESTS
// ============================================================================

mod currency_tests {
    use super::*;
    use core_kernel::Currency;

    /// Verifies quotes follow the engine's configured currency
    #[tokio::test]
    async fn test_eur_engine_quotes_in_eur() {
        let engine = RatingEngine::new().with_currency(Currency::EUR);
        let config = ApiConfig {
            currency: Currency::EUR,
            ..ApiConfig::default()
        };

        let response = create_router(Arc::new(engine), config)
            .oneshot(quote_request(json!({
                "age": 70,
                "vehicle_make": "honda",
                "vehicle_model": "civic",
                "accident_count": 2,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let payload = response_json(response).await;
        assert_eq!(payload["currency"], json!("EUR"));
        assert_eq!(payload["total"], json!("1900.00"));
    }
}
