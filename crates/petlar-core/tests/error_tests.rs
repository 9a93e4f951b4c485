// Rust guideline compliant 2026-10-18

//! Unit tests for error types and messages.

use petlar_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.contains("JSON error"), "JSON error should contain 'JSON error' prefix");
}

#[test]
fn test_invalid_status_formatting() {
    let error = Error::InvalidStatus("archived".to_string());
    assert_eq!(error.to_string(), "Invalid reservation status: archived");
}

#[test]
fn test_not_found_formatting() {
    let error = Error::NotFound("reservation res-9".to_string());
    assert_eq!(error.to_string(), "Record not found: reservation res-9");
}

#[test]
fn test_error_messages_are_single_line() {
    let errors = [
        Error::InvalidRecord("pet pet-1: name cannot be empty".to_string()),
        Error::InvalidConfig("max_pets_per_reservation must be greater than 0".to_string()),
        Error::InvalidStatus("x".to_string()),
    ];
    for error in errors {
        let msg = error.to_string();
        assert!(msg.contains(':'), "Error message should have structured format");
        assert!(!msg.contains('\n'), "Error message should be single line");
    }
}

#[test]
fn test_error_message_distinguishability() {
    let error1 = Error::NotFound("res-1".to_string());
    let error2 = Error::InvalidRecord("res-1".to_string());
    assert_ne!(error1.to_string(), error2.to_string());
}
