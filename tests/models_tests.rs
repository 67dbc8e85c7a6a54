use quiz_intake::core::models::{EmailMessage, SheetRow};

#[test]
fn test_sheet_row_cell_order() {
    let row = SheetRow {
        timestamp: "2026-08-29 12:00:00 UTC".to_string(),
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        answers: r#"{"q1":"yes"}"#.to_string(),
    };

    assert_eq!(
        row.cells(),
        ["2026-08-29 12:00:00 UTC", "Ann", "a@x.com", r#"{"q1":"yes"}"#]
    );
}

#[test]
fn test_confirmation_email_payload_shape() {
    let message = EmailMessage::confirmation("quiz@example.com", "a@x.com", "Ann", "[\"a\"]");

    assert_eq!(message.from, "quiz@example.com");
    assert_eq!(message.to, vec!["a@x.com".to_string()]);
    assert_eq!(message.subject, "Welcome, Ann! Here are your quiz results.");
    assert!(message.html.contains("<p>Hi Ann,</p>"));
    assert!(message.html.contains("Your recorded answers: [\"a\"]"));

    // The serialized payload must match what the Resend endpoint expects.
    let payload = serde_json::to_value(&message).unwrap();
    assert_eq!(payload["from"], "quiz@example.com");
    assert_eq!(payload["to"][0], "a@x.com");
    assert!(payload["subject"].is_string());
    assert!(payload["html"].is_string());
}
