//! Google Sheets collaborator client.
//!
//! Authenticates with a service-account JWT assertion and appends submission
//! rows through the Sheets v4 `values:append` endpoint. No retries and no
//! token caching: each append fetches a fresh access token, leaving any
//! credential reuse to the hosting runtime.

pub mod auth;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::core::models::SheetRow;
use crate::errors::SubmissionError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Service-account credential, deserialized from `SERVICE_ACCOUNT_JSON`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Client for appending rows to the configured spreadsheet.
pub struct SheetsClient {
    key: ServiceAccountKey,
    sheet_id: String,
    api_base: String,
}

impl SheetsClient {
    /// Resolve the spreadsheet credential from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Config`] when `SHEET_ID` or
    /// `SERVICE_ACCOUNT_JSON` is absent, or when the credential JSON does not
    /// describe a service-account key.
    pub fn new(config: &AppConfig) -> Result<Self, SubmissionError> {
        let sheet_id = config
            .sheet_id
            .clone()
            .ok_or_else(|| SubmissionError::Config("SHEET_ID is not set".to_string()))?;
        let raw_key = config.service_account_json.as_deref().ok_or_else(|| {
            SubmissionError::Config("SERVICE_ACCOUNT_JSON environment variable is not set".to_string())
        })?;
        let key: ServiceAccountKey = serde_json::from_str(raw_key).map_err(|e| {
            SubmissionError::Config(format!("SERVICE_ACCOUNT_JSON is not a valid credential: {e}"))
        })?;
        Ok(Self {
            key,
            sheet_id,
            api_base: config.sheets_api_url.clone(),
        })
    }

    /// Append one row to the first sheet of the configured spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns an error on token-exchange failure, transport failure, or a
    /// non-2xx API response. The caller treats all of these as fatal.
    pub async fn append_row(&self, row: &SheetRow) -> Result<(), SubmissionError> {
        let token = auth::fetch_access_token(&HTTP_CLIENT, &self.key).await?;

        // Range "A1" addresses the first sheet; the API extends the table
        // below any existing rows.
        let url = format!(
            "{}/v4/spreadsheets/{}/values/A1:append?valueInputOption=RAW",
            self.api_base, self.sheet_id
        );
        let payload = json!({ "values": [row.cells()] });

        let response = HTTP_CLIENT
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(SubmissionError::SheetApi(format!(
                "append returned {status}: {body}"
            )));
        }
        Ok(())
    }
}
