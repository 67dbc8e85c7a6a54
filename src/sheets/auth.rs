//! Service-account token exchange for the Sheets API.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::ServiceAccountKey;
use crate::errors::SubmissionError;

/// OAuth scopes granted to the service account: spreadsheet read/write and
/// drive file access.
pub const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive.file";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Exchange a signed JWT assertion for a bearer access token.
///
/// # Errors
///
/// Returns [`SubmissionError::Config`] when the private key cannot sign the
/// assertion, and transport/API errors from the token endpoint otherwise.
pub async fn fetch_access_token(
    http: &Client,
    key: &ServiceAccountKey,
) -> Result<String, SubmissionError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: &key.client_email,
        scope: SCOPES,
        aud: &key.token_uri,
        iat: now,
        exp: now + 3600,
    };

    let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &signing_key)?;

    let response = http
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        return Err(SubmissionError::SheetApi(format!(
            "token exchange returned {status}: {body}"
        )));
    }

    let body: Value = response.json().await?;
    body.get("access_token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            SubmissionError::SheetApi("token exchange response missing access_token".to_string())
        })
}
