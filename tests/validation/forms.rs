//! Form widget validation, rendering and error delegation.

use crate::common::test_app;
use serde_json::json;

#[test]
fn test_form_validation() {
    let resp = test_app()
        .post("/process_form", &[("title", "Razer"), ("year", "2007")])
        .unwrap();
    let values = resp.json().unwrap();
    assert_eq!(values["year"], json!(2007));
    assert_eq!(values["title"], json!("Razer"));
    assert_eq!(values["errors"], json!({}));
}

#[test]
fn test_form_render() {
    let resp = test_app().post("/display_form", &[]).unwrap();
    assert_eq!(resp.content_type, "text/html; charset=utf-8");
    assert!(resp.contains(r#"id="my_form_title.label""#));
    assert!(resp.contains(r#"class="fieldlabel required""#));
    assert!(resp.contains("Title"));
}

#[test]
fn test_form_render_with_prior_values() {
    let resp = test_app()
        .post("/display_form", &[("title", "<Razer>"), ("year", "2007")])
        .unwrap();
    assert!(resp.contains(r#"value="&lt;Razer&gt;""#));
    assert!(resp.contains(r#"value="2007" size="4""#));
    assert!(!resp.contains("fielderror"));
}

#[test]
fn test_form_validation_error() {
    let resp = test_app()
        .post("/process_form", &[("title", "Razer"), ("year", "t007")])
        .unwrap();
    let values = resp.json().unwrap();
    let message = values["errors"]["year"].as_str().unwrap();
    assert!(message.contains("Please enter an integer value"));
    assert_eq!(values["year"], json!("t007"));
}

#[test]
fn test_form_reports_every_failed_field() {
    let resp = test_app()
        .post("/process_form", &[("title", ""), ("year", "t007")])
        .unwrap();
    let errors = &resp.json().unwrap()["errors"];
    assert_eq!(errors["title"], json!("Please enter a value"));
    assert_eq!(errors["year"], json!("Please enter an integer value"));
}

#[test]
fn test_error_handler_receives_errors_and_values() {
    let resp = test_app()
        .post("/send_to_error_handler", &[("title", "Razer"), ("year", "t007")])
        .unwrap();
    let values = resp.json().unwrap();
    assert_eq!(values["title"], json!("Razer"));
    assert_eq!(values["year"], json!("t007"));
    assert_eq!(
        values["errors"]["year"],
        json!("Please enter an integer value")
    );
}

#[test]
fn test_error_handler_not_used_on_success() {
    let resp = test_app()
        .post("/send_to_error_handler", &[("title", "Razer"), ("year", "2007")])
        .unwrap();
    let values = resp.json().unwrap();
    assert_eq!(values["year"], json!(2007));
    assert_eq!(values["errors"], json!({}));
}
