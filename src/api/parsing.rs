//! Event payload accessors and submission validation.

use serde_json::Value;

use crate::core::models::SubmissionRequest;

/// Why a request body was rejected before reaching the collaborators.
#[derive(Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Body absent, empty, or a JSON value with nothing in it (null, `false`,
    /// zero, an empty string, or an empty container).
    NoPayload,
    /// Body unparseable, or parseable to a non-object value with content.
    MalformedJson,
    /// Required fields absent, null, or (for name/email) empty.
    MissingFields(Vec<&'static str>),
}

// ============================================================================
// Lambda Event Accessors
// ============================================================================

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of the inbound request, from either the HTTP API v2 event
/// shape (`requestContext.http.method`) or the v1 shape (`httpMethod`).
pub fn request_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"]).or_else(|| v_str(event, &["httpMethod"]))
}

/// Raw request body, if the event carries one.
pub fn request_body(event: &Value) -> Option<&str> {
    v_str(event, &["body"])
}

// ============================================================================
// Submission Validation
// ============================================================================

/// Parse and validate a submission body.
///
/// The three fields are checked in a fixed order so the rejection message
/// lists them deterministically. `quizAnswers` may be any non-null JSON value
/// (`false` and `0` are valid answers); `name` and `email` must be non-empty
/// strings.
///
/// # Errors
///
/// Returns a [`Rejection`] describing which 400 response to send.
pub fn parse_submission(body: &str) -> Result<SubmissionRequest, Rejection> {
    let parsed: Value = serde_json::from_str(body).map_err(|_| Rejection::MalformedJson)?;

    let data = match parsed {
        Value::Object(map) if !map.is_empty() => map,
        other if is_empty_payload(&other) => return Err(Rejection::NoPayload),
        // A body with content but no object shape cannot hold the fields.
        _ => return Err(Rejection::MalformedJson),
    };

    let name = data.get("name").and_then(non_empty_str);
    let email = data.get("email").and_then(non_empty_str);
    let answers = data.get("quizAnswers").filter(|v| !v.is_null());

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if answers.is_none() {
        missing.push("quizAnswers");
    }
    if !missing.is_empty() {
        return Err(Rejection::MissingFields(missing));
    }

    Ok(SubmissionRequest {
        name: name.unwrap_or_default().to_string(),
        email: email.unwrap_or_default().to_string(),
        quiz_answers: answers.cloned().unwrap_or_default(),
    })
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// A JSON value with nothing in it: null, `false`, zero, an empty string, or
/// an empty container. Such bodies are rejected as "no payload" rather than
/// as malformed JSON.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Serialize quiz answers for the sheet cell and the confirmation email.
///
/// Lists and mappings become compact JSON; scalars use their plain text form
/// (no quotes around strings).
#[must_use]
pub fn serialize_answers(answers: &Value) -> String {
    match answers {
        // Display for Value renders compact JSON, which is what the sheet stores.
        Value::Array(_) | Value::Object(_) => answers.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
