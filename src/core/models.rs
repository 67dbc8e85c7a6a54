use serde::Serialize;
use serde_json::Value;

/// One validated quiz submission, alive for the duration of a single request.
#[derive(Debug)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub quiz_answers: Value,
}

/// The row appended to the spreadsheet for one accepted submission.
///
/// Column order is fixed: timestamp, name, email, serialized answers.
#[derive(Debug)]
pub struct SheetRow {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub answers: String,
}

impl SheetRow {
    /// The row as the cell list expected by the Sheets `values:append` call.
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [
            self.timestamp.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.answers.as_str(),
        ]
    }
}

/// Payload for the Resend `/emails` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    /// Build the confirmation email for a recorded submission.
    #[must_use]
    pub fn confirmation(sender: &str, recipient: &str, name: &str, answers: &str) -> Self {
        Self {
            from: sender.to_string(),
            to: vec![recipient.to_string()],
            subject: format!("Welcome, {name}! Here are your quiz results."),
            html: format!(
                "<p>Hi {name},</p><p>Thank you for submitting the quiz!</p>\
                 <p>Your recorded answers: {answers}</p>"
            ),
        }
    }
}
