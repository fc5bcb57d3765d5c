//! Tests for CountryPolicy

use axum::http::HeaderValue;

use super::*;

#[test]
fn test_header_present() {
    let policy = CountryPolicy::default();
    let mut headers = HeaderMap::new();
    headers.insert("CF-IPCountry", HeaderValue::from_static("US"));

    assert_eq!(policy.resolve(&headers), "US");
}

#[test]
fn test_header_absent_falls_back() {
    let policy = CountryPolicy::default();
    let headers = HeaderMap::new();

    assert_eq!(policy.resolve(&headers), "KR");
}

#[test]
fn test_header_lookup_is_case_insensitive() {
    let policy = CountryPolicy::default();
    let mut headers = HeaderMap::new();
    headers.insert("cf-ipcountry", HeaderValue::from_static("BR"));

    assert_eq!(policy.resolve(&headers), "BR");
}

#[test]
fn test_empty_header_falls_back() {
    let policy = CountryPolicy::default();
    let mut headers = HeaderMap::new();
    headers.insert("CF-IPCountry", HeaderValue::from_static(""));

    assert_eq!(policy.resolve(&headers), "KR");
}

#[test]
fn test_custom_header_and_fallback() {
    let policy = CountryPolicy::new("X-Country", "US");
    let mut headers = HeaderMap::new();
    headers.insert("X-Country", HeaderValue::from_static("JP"));

    assert_eq!(policy.resolve(&headers), "JP");

    let empty = HeaderMap::new();
    assert_eq!(policy.resolve(&empty), "US");
}

#[test]
fn test_malformed_code_passed_through() {
    // Codes are opaque; the ledger just gets a new bucket
    let policy = CountryPolicy::default();
    let mut headers = HeaderMap::new();
    headers.insert("CF-IPCountry", HeaderValue::from_static("not-a-code"));

    assert_eq!(policy.resolve(&headers), "not-a-code");
}
