//! Integration tests for the stats endpoints
//!
//! Drives the real router with oneshot requests; no network involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use poptap_api::{build_router, AppState, CountryPolicy};
use poptap_feed::StatsFeed;
use poptap_ledger::Ledger;

fn test_app() -> Router {
    let ledger = Arc::new(Ledger::new());
    let feed = Arc::new(StatsFeed::new(Arc::clone(&ledger)));
    build_router(AppState::new(ledger, feed, CountryPolicy::default()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn tap_with_country(country: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/tap")
        .header("CF-IPCountry", country)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Stats and taps
// ============================================================================

#[tokio::test]
async fn test_stats_starts_empty() {
    let app = test_app();
    let response = app.oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["totalTaps"], 0);
    assert_eq!(body["activeUsers"], 0);
    assert_eq!(body["countries"], serde_json::json!({}));
}

#[tokio::test]
async fn test_tap_records_and_reports_totals() {
    let app = test_app();

    let response = app.clone().oneshot(tap_with_country("US")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["country"], "US");
    assert_eq!(body["countryTotal"], 1);
    assert_eq!(body["globalTotal"], 1);
}

#[tokio::test]
async fn test_three_taps_then_stats() {
    let app = test_app();

    for _ in 0..3 {
        let response = app.clone().oneshot(tap_with_country("US")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = json_body(app.oneshot(get("/api/stats")).await.unwrap()).await;
    assert_eq!(body["totalTaps"], 3);
    assert_eq!(body["countries"]["US"], 3);
}

#[tokio::test]
async fn test_tap_without_header_uses_fallback() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/tap")
        .body(Body::empty())
        .unwrap();
    let body = json_body(app.oneshot(request).await.unwrap()).await;

    assert_eq!(body["country"], "KR");
    assert_eq!(body["countryTotal"], 1);
}

#[tokio::test]
async fn test_tap_ignores_request_body() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/tap")
        .header(header::CONTENT_TYPE, "application/json")
        .header("CF-IPCountry", "JP")
        .body(Body::from(r#"{"country": "US"}"#))
        .unwrap();
    let body = json_body(app.oneshot(request).await.unwrap()).await;

    // Only the edge header counts
    assert_eq!(body["country"], "JP");
}

// ============================================================================
// Country stats
// ============================================================================

#[tokio::test]
async fn test_country_stats_full_share() {
    let app = test_app();

    for _ in 0..3 {
        app.clone().oneshot(tap_with_country("US")).await.unwrap();
    }

    let body = json_body(app.oneshot(get("/api/country/US")).await.unwrap()).await;
    assert_eq!(body["country"], "US");
    assert_eq!(body["total"], 3);
    assert_eq!(body["percentage"], 100.0);
}

#[tokio::test]
async fn test_country_stats_unknown_country() {
    let app = test_app();
    app.clone().oneshot(tap_with_country("US")).await.unwrap();

    let body = json_body(app.oneshot(get("/api/country/ZZ")).await.unwrap()).await;
    assert_eq!(body["country"], "ZZ");
    assert_eq!(body["total"], 0);
    assert_eq!(body["percentage"], 0.0);
}

#[tokio::test]
async fn test_country_stats_no_taps_at_all() {
    let app = test_app();

    let body = json_body(app.oneshot(get("/api/country/US")).await.unwrap()).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["percentage"], 0.0);
}

// ============================================================================
// Leaderboard
// ============================================================================

#[tokio::test]
async fn test_leaderboard_empty() {
    let app = test_app();

    let body = json_body(app.oneshot(get("/api/leaderboard")).await.unwrap()).await;
    assert_eq!(body["totalTaps"], 0);
    assert_eq!(body["countries"], serde_json::json!([]));
}

#[tokio::test]
async fn test_leaderboard_sorted_and_complete() {
    let app = test_app();

    for _ in 0..2 {
        app.clone().oneshot(tap_with_country("KR")).await.unwrap();
    }
    for _ in 0..5 {
        app.clone().oneshot(tap_with_country("US")).await.unwrap();
    }
    app.clone().oneshot(tap_with_country("JP")).await.unwrap();

    let body = json_body(app.oneshot(get("/api/leaderboard")).await.unwrap()).await;
    assert_eq!(body["totalTaps"], 8);

    let countries = body["countries"].as_array().unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(countries[0]["country"], "US");
    assert_eq!(countries[0]["count"], 5);
    assert_eq!(countries[1]["country"], "KR");
    assert_eq!(countries[2]["country"], "JP");
}

#[tokio::test]
async fn test_leaderboard_truncates_to_ten() {
    let app = test_app();

    let codes = [
        "AA", "BB", "CC", "DD", "EE", "FF", "GG", "HH", "II", "JJ", "KK", "LL",
    ];
    for code in codes {
        app.clone().oneshot(tap_with_country(code)).await.unwrap();
    }

    let body = json_body(app.oneshot(get("/api/leaderboard")).await.unwrap()).await;
    assert_eq!(body["countries"].as_array().unwrap().len(), 10);
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_tap_rejects_get() {
    let app = test_app();
    let response = app.oneshot(get("/api/tap")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = test_app();
    let response = app.oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
