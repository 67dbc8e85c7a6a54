use std::error::Error;

use quiz_intake::SubmissionError;

#[test]
fn test_submission_error_implements_error_trait() {
    // Verify SubmissionError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SubmissionError::Config("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_submission_error_display() {
    // Verify Display implementation works correctly; these strings become the
    // `<cause>` portion of 500 response bodies.
    let error = SubmissionError::Config("SHEET_ID is not set".to_string());
    assert_eq!(format!("{error}"), "configuration error: SHEET_ID is not set");

    let error = SubmissionError::SheetApi("append returned 403".to_string());
    assert_eq!(format!("{error}"), "Google Sheets API error: append returned 403");

    let error = SubmissionError::EmailApi("send returned 401".to_string());
    assert_eq!(format!("{error}"), "Resend API error: send returned 401");

    let error = SubmissionError::Http("connection refused".to_string());
    assert_eq!(format!("{error}"), "Failed to send HTTP request: connection refused");
}

#[test]
fn test_submission_error_from_conversions() {
    // Signing with an invalid PEM yields a Config error through the
    // jsonwebtoken conversion.
    let jwt_err = match jsonwebtoken::EncodingKey::from_rsa_pem(b"not a pem") {
        Err(e) => e,
        Ok(_) => panic!("invalid PEM should have been rejected"),
    };
    let err: SubmissionError = jwt_err.into();
    match err {
        SubmissionError::Config(msg) => assert!(msg.contains("service account key rejected")),
        _ => panic!("Unexpected error type"),
    }

    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists and compiles.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SubmissionError {
        SubmissionError::from(err)
    }
}
