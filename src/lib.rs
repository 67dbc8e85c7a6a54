/// quiz-intake - A serverless HTTP endpoint that records quiz submissions.
///
/// This crate implements a single-Lambda intake pipeline for quiz results:
/// 1. The API Lambda receives a submission (name, email, answers) over HTTP
/// 2. The submission is appended as one row to a shared Google Sheet
/// 3. A confirmation email is sent to the submitter through Resend (best-effort)
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - The Google Sheets v4 REST API for row storage, authenticated with a
///   service-account JWT assertion
/// - The Resend HTTP API for confirmation emails
/// - Tokio for async runtime
///
/// The sheet append is the only fatal collaborator call: if it fails, the
/// request fails with a 500. The email send never affects the response; its
/// outcome is only logged.
// Module declarations
pub mod api;
pub mod core;
pub mod email;
pub mod errors;
pub mod sheets;

pub use errors::SubmissionError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// quiz_intake::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
