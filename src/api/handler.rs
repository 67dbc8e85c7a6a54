//! API Lambda handler - the single submission endpoint.
//!
//! This module handles:
//! - CORS preflight and method dispatch
//! - Payload parsing and field validation
//! - The fatal sheet-append call
//! - The best-effort confirmation email

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{EmailMessage, SheetRow};
use crate::email;
use crate::sheets::SheetsClient;

pub use self::function_handler as handler;

// Configuration snapshot, taken once per process and reused across
// invocations.
static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

/// Lambda handler for the submission endpoint.
///
/// Resolves configuration from the environment once per process and delegates
/// to [`handle_submission`].
///
/// # Errors
///
/// Never fails: every outcome, including collaborator failures, is expressed
/// as a response payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(handle_submission(&CONFIG, &event.payload).await)
}

/// Process one inbound request and produce the Lambda proxy response.
///
/// The flow is strictly sequential: method dispatch, parse/validate, sheet
/// append, email attempt. Nothing is retried, and nothing persists between
/// steps other than the parsed submission itself.
pub async fn handle_submission(config: &AppConfig, event: &Value) -> Value {
    let correlation_id = Uuid::new_v4().to_string();
    let method = parsing::request_method(event).unwrap_or_default();

    // ========================================================================
    // Method dispatch
    // ========================================================================

    if method == "OPTIONS" {
        return helpers::preflight_response();
    }

    if method != "POST" {
        info!(corr_id = %correlation_id, method = %method, "Rejected non-POST request");
        return helpers::text_response(405, "Only POST requests are accepted");
    }

    // ========================================================================
    // Parse and validate the submission
    // ========================================================================

    let body = parsing::request_body(event).unwrap_or_default();
    if body.is_empty() {
        info!(corr_id = %correlation_id, "Rejected request without a body");
        return helpers::text_response(400, "Invalid request: No JSON payload received.");
    }

    let submission = match parsing::parse_submission(body) {
        Ok(submission) => submission,
        Err(parsing::Rejection::NoPayload) => {
            info!(corr_id = %correlation_id, "Rejected empty JSON payload");
            return helpers::text_response(400, "Invalid request: No JSON payload received.");
        }
        Err(parsing::Rejection::MalformedJson) => {
            info!(corr_id = %correlation_id, "Rejected malformed JSON payload");
            return helpers::text_response(400, "Invalid JSON format in request body.");
        }
        Err(parsing::Rejection::MissingFields(missing)) => {
            info!(corr_id = %correlation_id, fields = %missing.join(", "), "Rejected incomplete submission");
            return helpers::text_response(
                400,
                &format!("Missing required fields: {}.", missing.join(", ")),
            );
        }
    };

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let answers = parsing::serialize_answers(&submission.quiz_answers);
    let row = SheetRow {
        timestamp,
        name: submission.name.clone(),
        email: submission.email.clone(),
        answers: answers.clone(),
    };

    // ========================================================================
    // Append the row (fatal on failure)
    // ========================================================================

    let append = match SheetsClient::new(config) {
        Ok(client) => client.append_row(&row).await,
        Err(e) => Err(e),
    };
    if let Err(e) = append {
        error!(corr_id = %correlation_id, "Sheet append failed: {e}");
        return helpers::text_response(
            500,
            &format!("An unexpected error occurred while updating the sheet: {e}"),
        );
    }
    info!(corr_id = %correlation_id, "Appended submission row to sheet");

    // ========================================================================
    // Confirmation email (best-effort, never affects the response)
    // ========================================================================

    send_confirmation_email(config, &correlation_id, &submission.name, &submission.email, &answers)
        .await;

    helpers::text_response(200, "Quiz submission processed successfully.")
}

/// Attempt the confirmation email and discard the outcome into the log.
///
/// The contract is explicit: whatever happens here, the caller already
/// considers the submission processed.
async fn send_confirmation_email(
    config: &AppConfig,
    correlation_id: &str,
    name: &str,
    recipient: &str,
    answers: &str,
) {
    let Some(api_key) = config.resend_api_key.as_deref() else {
        info!(corr_id = %correlation_id, "Resend API key is not configured, skipping email");
        return;
    };
    let Some(sender) = config.resend_sender_email.as_deref() else {
        warn!(corr_id = %correlation_id, "Resend sender address is not configured, skipping email");
        return;
    };

    let message = EmailMessage::confirmation(sender, recipient, name, answers);
    match email::send(&config.resend_api_url, api_key, &message).await {
        Ok(()) => info!(corr_id = %correlation_id, "Confirmation email sent to {recipient}"),
        Err(e) => error!(corr_id = %correlation_id, "Confirmation email failed: {e}"),
    }
}
