//! Validation decoration on controller actions.
//!
//! Each test posts form data to one of the fixture actions and checks what
//! the handler (or its error handler) produced.

use crate::common::test_app;
use formgate::{FormgateError, HandlerError};
use serde_json::json;

#[test]
fn test_basic_validation_and_jsonification() {
    let resp = test_app()
        .post("/validated_int", &[("some_int", "22")])
        .unwrap();
    assert_eq!(resp.content_type, "application/json");
    assert_eq!(resp.json().unwrap(), json!({ "response": 22 }));
}

#[test]
fn test_for_other_params_after_validation() {
    let resp = test_app()
        .post("/validated_and_unvalidated", &[("a", "1"), ("b", "string")])
        .unwrap();
    let body = resp.json().unwrap();
    assert_eq!(body["int"], json!(1));
    assert_eq!(body["str"], json!("string"));
}

#[test]
fn test_validation_fails_with_no_error_handler() {
    let err = test_app()
        .post("/validated_and_unvalidated", &[("a", "asdf"), ("b", "string")])
        .unwrap_err();
    match err {
        FormgateError::Handler { action, source } => {
            assert_eq!(action, "validated_and_unvalidated");
            assert_eq!(
                source,
                HandlerError::unexpected_type("a", "integer", "string")
            );
        }
        other => panic!("expected handler failure, got {other}"),
    }
}

#[test]
fn test_two_validators_errors() {
    let resp = test_app()
        .post("/two_validators", &[("a", "1"), ("someemail", "guido@google.com")])
        .unwrap();
    let content = resp.json().unwrap();
    assert_eq!(content["a"], json!(1));
    assert_eq!(content["someemail"], json!("guido@google.com"));
    assert_eq!(content["errors"], json!({}));
}

#[test]
fn test_validation_errors() {
    let resp = test_app()
        .post("/two_validators", &[("a", "1"), ("someemail", "guido~google.com")])
        .unwrap();
    let content = resp.json().unwrap();
    let errors = content["errors"]
        .as_object()
        .expect("errors should be an object");
    assert!(!errors.is_empty(), "There should have been at least one error");
    assert!(
        errors.contains_key("someemail"),
        "The email was invalid and should have been reported in the errors"
    );
    assert!(!errors.contains_key("a"));
}

#[test]
fn test_failed_validation_hands_raw_values_to_handler() {
    let resp = test_app()
        .post("/two_validators", &[("a", "1"), ("someemail", "guido~google.com")])
        .unwrap();
    let content = resp.json().unwrap();
    // nothing is converted when any field fails
    assert_eq!(content["a"], json!("1"));
    assert_eq!(
        content["values"],
        json!({ "a": "1", "someemail": "guido~google.com" })
    );
    assert_eq!(
        content["errors"]["someemail"],
        json!("An email address must contain a single @")
    );
}

#[test]
fn test_schema_validation_error() {
    let app = test_app();
    let resp = app
        .post("/password", &[("pwd1", "me"), ("pwd2", "you")])
        .unwrap();
    assert!(resp.contains("There was an error"));

    let resp = app
        .post("/password", &[("pwd1", "you"), ("pwd2", "you")])
        .unwrap();
    assert!(resp.contains("Password ok!"));
}

#[test]
fn test_schema_rejects_empty_password() {
    let resp = test_app()
        .post("/password", &[("pwd1", ""), ("pwd2", "")])
        .unwrap();
    assert_eq!(resp.body(), "There was an error");
}

#[test]
fn test_controller_based_validator() {
    let resp = test_app()
        .post("/validate_controller_based_validator", &[])
        .unwrap();
    assert!(resp.contains("ok"));
    assert_eq!(resp.content_type, "text/plain; charset=utf-8");
}

#[test]
fn test_query_string_parameters_are_validated() {
    let resp = test_app().get("/validated_int?some_int=7").unwrap();
    assert_eq!(resp.json().unwrap(), json!({ "response": 7 }));
}
