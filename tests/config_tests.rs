use quiz_intake::core::config::{AppConfig, DEFAULT_RESEND_API_URL, DEFAULT_SHEETS_API_URL};

// Environment mutation is process-global, so everything lives in a single
// test function; this file is its own test binary and does not race with the
// other test files.
#[test]
fn test_from_env_defaults_and_overrides() {
    // With a clean environment every credential is absent and the API URLs
    // fall back to the production endpoints.
    for var in [
        "SHEET_ID",
        "SERVICE_ACCOUNT_JSON",
        "RESEND_API_KEY",
        "RESEND_SENDER_EMAIL",
        "SHEETS_API_URL",
        "RESEND_API_URL",
    ] {
        unsafe { std::env::remove_var(var) };
    }

    let config = AppConfig::from_env();
    assert_eq!(config.sheet_id, None);
    assert_eq!(config.service_account_json, None);
    assert_eq!(config.resend_api_key, None);
    assert_eq!(config.resend_sender_email, None);
    assert_eq!(config.sheets_api_url, DEFAULT_SHEETS_API_URL);
    assert_eq!(config.resend_api_url, DEFAULT_RESEND_API_URL);

    // Set everything and read it back.
    unsafe {
        std::env::set_var("SHEET_ID", "sheet-123");
        std::env::set_var("SERVICE_ACCOUNT_JSON", "{}");
        std::env::set_var("RESEND_API_KEY", "re_key");
        std::env::set_var("RESEND_SENDER_EMAIL", "quiz@example.com");
        std::env::set_var("SHEETS_API_URL", "http://localhost:8080");
        std::env::set_var("RESEND_API_URL", "http://localhost:8081/emails");
    }

    let config = AppConfig::from_env();
    assert_eq!(config.sheet_id.as_deref(), Some("sheet-123"));
    assert_eq!(config.service_account_json.as_deref(), Some("{}"));
    assert_eq!(config.resend_api_key.as_deref(), Some("re_key"));
    assert_eq!(config.resend_sender_email.as_deref(), Some("quiz@example.com"));
    assert_eq!(config.sheets_api_url, "http://localhost:8080");
    assert_eq!(config.resend_api_url, "http://localhost:8081/emails");

    // The Lambda handler snapshots configuration once per process: mutating
    // the environment after the first invocation must not change later ones.
    // `{}` is present but not a valid credential, which is distinguishable
    // from the "not set" error an env re-read would produce.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime");

    let first = runtime.block_on(invoke_handler());
    assert_eq!(first["statusCode"], 500);
    assert!(first["body"].as_str().expect("body").contains("not a valid credential"));

    unsafe { std::env::remove_var("SERVICE_ACCOUNT_JSON") };
    let second = runtime.block_on(invoke_handler());
    assert!(
        second["body"].as_str().expect("body").contains("not a valid credential"),
        "handler must keep the process-start snapshot: {second:?}"
    );
}

async fn invoke_handler() -> serde_json::Value {
    let payload = serde_json::json!({
        "requestContext": { "http": { "method": "POST" } },
        "body": r#"{"name": "Ann", "email": "a@x.com", "quizAnswers": 1}"#,
    });
    let event = lambda_runtime::LambdaEvent::new(payload, lambda_runtime::Context::default());
    quiz_intake::api::handler::function_handler(event)
        .await
        .expect("handler never fails")
}
