use std::env;

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Application configuration, read from the environment once per process and
/// passed into the handler by reference.
///
/// Every credential is optional at construction time: missing spreadsheet
/// configuration is reported when the sheets client is built (as a 500 on the
/// request), and a missing Resend key simply disables the confirmation email.
/// The API URLs exist so tests can point the clients at a local double.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheet_id: Option<String>,
    pub service_account_json: Option<String>,
    pub resend_api_key: Option<String>,
    pub resend_sender_email: Option<String>,
    pub sheets_api_url: String,
    pub resend_api_url: String,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            sheet_id: env::var("SHEET_ID").ok(),
            service_account_json: env::var("SERVICE_ACCOUNT_JSON").ok(),
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            resend_sender_email: env::var("RESEND_SENDER_EMAIL").ok(),
            sheets_api_url: env::var("SHEETS_API_URL")
                .unwrap_or_else(|_| DEFAULT_SHEETS_API_URL.to_string()),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
        }
    }
}
