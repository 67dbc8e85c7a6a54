//! Response builders for the API handler.
//!
//! Responses use the Lambda proxy shape (`statusCode`, `headers`, `body`).
//! Every response carries `Access-Control-Allow-Origin: *` so the browser
//! form that posts submissions can run from any origin.

use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a plain-text response with the given status code and CORS header.
#[must_use]
pub fn text_response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Access-Control-Allow-Origin": "*" },
        "body": body
    })
}

/// Returns the 204 CORS preflight response for `OPTIONS` requests.
///
/// Permits cross-origin `POST` with a `Content-Type` header, cacheable for
/// one hour.
#[must_use]
pub fn preflight_response() -> Value {
    json!({
        "statusCode": 204,
        "headers": {
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST",
            "Access-Control-Allow-Headers": "Content-Type",
            "Access-Control-Max-Age": "3600"
        },
        "body": ""
    })
}
