//! Shared fixtures for controller validation tests.
//!
//! `basic_controller` exposes one action per validation style: per-field
//! validators, a password schema with a chained rule, a table form (with and
//! without an error handler), and a controller-supplied validator.

use formgate::controller::{
    Action, Controller, ControllerValidator, Expose, FieldValidators, Output, Validate,
};
use formgate::schema::Schema;
use formgate::testing::TestApp;
use formgate::validators::{
    Email, FieldsMatch, FormErrors, Int, NotEmpty, State, StringValidator, ValidationResult,
};
use formgate::widgets::{Field, TableForm};
use formgate::{Application, Params};
use serde_json::{Value, json};
use std::sync::Arc;

/// Enable log output for a test run; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The movie form: a required title and an integer year.
pub fn movie_form() -> TableForm {
    TableForm::new("my_form", "create")
        .field(Field::text("title").validator(NotEmpty))
        .field(Field::text("year").size(4).validator(Int::new()))
}

/// Two password fields that must both be filled in and match.
pub fn password_schema() -> Schema {
    Schema::new()
        .field("pwd1", StringValidator::new().not_empty())
        .field("pwd2", StringValidator::new().not_empty())
        .chained(FieldsMatch::new(["pwd1", "pwd2"]))
}

/// Accepts every submission unchanged.
#[derive(Debug)]
pub struct PassThrough;

impl ControllerValidator for PassThrough {
    fn validate(
        &self,
        _controller: &Controller,
        params: Params,
        _state: &State,
    ) -> ValidationResult<Params> {
        Ok(params)
    }
}

fn params_with_errors(params: &Params, errors: &FormErrors) -> Output {
    let mut body = params.clone();
    body.insert("errors", json!(errors));
    Output::json_map(body)
}

pub fn basic_controller() -> Controller {
    let form = Arc::new(movie_form());
    let display = Arc::clone(&form);

    Controller::builder("root")
        .action(
            "validated_int",
            Action::new(Expose::Json, |_, params| {
                let some_int = params.int("some_int")?;
                Ok(Output::Json(json!({ "response": some_int })))
            })
            .validate(Validate::fields(
                FieldValidators::new().field("some_int", Int::new()),
            )),
        )
        .action(
            "validated_and_unvalidated",
            Action::new(Expose::Json, |_, params| {
                let a = params.int("a")?;
                let b = params.text("b")?;
                Ok(Output::Json(json!({ "int": a, "str": b })))
            })
            .validate(Validate::fields(FieldValidators::new().field("a", Int::new()))),
        )
        .action(
            "validate_controller_based_validator",
            Action::new(Expose::Text, |_, _| Ok(Output::text("ok")))
                .validate(Validate::controller(PassThrough)),
        )
        .action(
            "two_validators",
            Action::new(Expose::Json, |ctx, params| {
                Ok(Output::Json(json!({
                    "a": params.get("a").cloned().unwrap_or(Value::Null),
                    "someemail": params.get("someemail").cloned().unwrap_or(Value::Null),
                    "errors": ctx.form_errors,
                    "values": ctx.form_values,
                })))
            })
            .validate(Validate::fields(
                FieldValidators::new()
                    .field("a", Int::new())
                    .field("someemail", Email::new()),
            )),
        )
        .action(
            "display_form",
            Action::new(Expose::Html, move |ctx, params| {
                Ok(Output::text(display.render(params, &ctx.form_errors)))
            }),
        )
        .action(
            "process_form",
            Action::new(Expose::Json, |ctx, params| {
                Ok(params_with_errors(params, &ctx.form_errors))
            })
            .validate(Validate::form(Arc::clone(&form))),
        )
        .action(
            "send_to_error_handler",
            Action::new(Expose::Json, |ctx, params| {
                Ok(params_with_errors(params, &ctx.form_errors))
            })
            .validate(Validate::form(Arc::clone(&form)).error_handler("process_form")),
        )
        .action(
            "password",
            Action::new(Expose::Text, |ctx, _| {
                if ctx.validation_failed() {
                    Ok(Output::text("There was an error"))
                } else {
                    Ok(Output::text("Password ok!"))
                }
            })
            .validate(Validate::schema(password_schema())),
        )
        .build()
        .expect("controller fixture is consistent")
}

/// Test client over [`basic_controller`].
pub fn test_app() -> TestApp {
    init_logging();
    TestApp::new(Application::new(basic_controller()).expect("default config is valid"))
}
