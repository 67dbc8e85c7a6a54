use thiserror::Error;

/// Failures that can occur while processing an accepted submission.
///
/// Client input problems (bad method, missing payload, missing fields) never
/// become a `SubmissionError`; they are answered directly with 400/405
/// responses. This enum covers configuration and collaborator failures only.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("Google Sheets API error: {0}")]
    SheetApi(String),

    #[error("Resend API error: {0}")]
    EmailApi(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(error: reqwest::Error) -> Self {
        SubmissionError::Http(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for SubmissionError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        SubmissionError::Config(format!("service account key rejected: {error}"))
    }
}
