//! Country attribution
//!
//! The server trusts exactly one input: an edge-provided country header
//! (Cloudflare's `CF-IPCountry` by default). Absent that, the configured
//! fallback code is attributed. No IP geolocation is performed here, and
//! any client-reported geolocation guess is ignored - the client's
//! displayed country and the server's attributed country may legitimately
//! disagree.

use axum::http::HeaderMap;

/// Default trusted edge header
pub const DEFAULT_COUNTRY_HEADER: &str = "CF-IPCountry";

/// Default fallback country code
pub const DEFAULT_FALLBACK_COUNTRY: &str = "KR";

/// Resolves the country attributed to a request
#[derive(Debug, Clone)]
pub struct CountryPolicy {
    header: String,
    fallback: String,
}

impl Default for CountryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_HEADER, DEFAULT_FALLBACK_COUNTRY)
    }
}

impl CountryPolicy {
    /// Create a policy with a custom header name and fallback code
    pub fn new(header: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fallback: fallback.into(),
        }
    }

    /// Resolve the country for a request.
    ///
    /// The header value is taken as-is when present and non-empty; codes
    /// are opaque strings and never validated.
    pub fn resolve(&self, headers: &HeaderMap) -> String {
        headers
            .get(self.header.as_str())
            .and_then(|value| value.to_str().ok())
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
#[path = "country_test.rs"]
mod tests;
