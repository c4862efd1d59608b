//! Locale-aware error messages.

use crate::common::test_app;
use serde_json::json;

const BAD_YEAR: &[(&str, &str)] = &[("title", "Razer"), ("year", "t007")];

#[test]
fn test_form_validation_translation() {
    let resp = test_app()
        .post_with_headers("/send_to_error_handler", BAD_YEAR, &[("Accept-Language", "ru")])
        .unwrap();
    let values = resp.json().unwrap();
    let message = values["errors"]["year"].as_str().unwrap();
    assert!(message.contains("Введите числовое значение"));
}

#[test]
fn test_translation_with_weighted_header() {
    let resp = test_app()
        .post_with_headers(
            "/process_form",
            BAD_YEAR,
            &[("Accept-Language", "fr-FR, de;q=0.7, en;q=0.3")],
        )
        .unwrap();
    let values = resp.json().unwrap();
    assert_eq!(
        values["errors"]["year"],
        json!("Bitte eine ganze Zahl eingeben")
    );
}

#[test]
fn test_unsupported_language_falls_back_to_english() {
    let resp = test_app()
        .post_with_headers("/process_form", BAD_YEAR, &[("Accept-Language", "ja")])
        .unwrap();
    let values = resp.json().unwrap();
    assert_eq!(
        values["errors"]["year"],
        json!("Please enter an integer value")
    );
}

#[test]
fn test_rendered_form_shows_translated_error() {
    use formgate::i18n::Locale;
    use formgate::validators::{FormErrors, State};

    let form = crate::common::movie_form();
    let params = formgate::Params::from_pairs(BAD_YEAR.iter().copied());
    let invalid = form
        .validate(params.clone(), &State::new(Locale::Ru, "req"))
        .unwrap_err();
    let errors: FormErrors = invalid.unpack_errors(Locale::Ru);

    let html = form.render(&params, &errors);
    assert!(html.contains(r#"<span class="fielderror">Введите числовое значение</span>"#));
}
