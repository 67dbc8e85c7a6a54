//! Resend collaborator client.
//!
//! One bearer-auth POST per confirmation email. Failures here are the
//! caller's to log and discard: the submission response never depends on
//! this module succeeding.

use reqwest::Client;
use std::time::Duration;
use tracing::error;

use crate::core::models::EmailMessage;
use crate::errors::SubmissionError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Send one email through the Resend HTTP API.
///
/// # Errors
///
/// Returns [`SubmissionError::EmailApi`] for a non-2xx response and
/// [`SubmissionError::Http`] for transport failures.
pub async fn send(
    api_url: &str,
    api_key: &str,
    message: &EmailMessage,
) -> Result<(), SubmissionError> {
    let response = HTTP_CLIENT
        .post(api_url)
        .bearer_auth(api_key)
        .json(message)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        error!("Resend POST failed: status={status} body={body}");
        return Err(SubmissionError::EmailApi(format!(
            "send returned {status}: {body}"
        )));
    }
    Ok(())
}
