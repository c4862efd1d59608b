//! Declarative request validation for controller actions.
//!
//! Attach validation to an action and let the dispatcher convert submitted
//! form fields before the handler runs: per-field validators, whole-form
//! schemas with cross-field rules, form widgets that validate and render
//! themselves, or application-supplied logic. Failed submissions are not
//! errors: translated messages and the raw values land in the
//! [`RequestContext`] for the handler or a designated error handler.
//!
//! # Core Components
//!
//! - [`Application`] - Dispatches requests to controller actions
//! - [`controller::Validate`] - Validation decoration for an action
//! - [`validators`] - Field and chained validators
//! - [`schema::Schema`] - Whole-form validation
//! - [`widgets::TableForm`] - Self-rendering, self-validating form
//! - [`i18n`] - Locale negotiation and message catalogs
//!
//! # Quick Start
//!
//! ```rust
//! use formgate::controller::{Action, Controller, Expose, FieldValidators, Output, Validate};
//! use formgate::testing::TestApp;
//! use formgate::validators::Int;
//! use formgate::Application;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Controller::builder("root")
//!     .action(
//!         "validated_int",
//!         Action::new(Expose::Json, |_ctx, params| {
//!             Ok(Output::Json(json!({ "response": params.int("some_int")? })))
//!         })
//!         .validate(Validate::fields(FieldValidators::new().field("some_int", Int::new()))),
//!     )
//!     .build()?;
//!
//! let app = TestApp::new(Application::new(controller)?);
//! let response = app.post("/validated_int", &[("some_int", "22")])?;
//! assert_eq!(response.json()?, json!({ "response": 22 }));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod controller;
pub mod error;
pub mod i18n;
pub mod params;
pub mod schema;
pub mod testing;
pub mod validators;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{Application, ApplicationBuilder, Request, Response};
pub use context::RequestContext;
pub use error::{ConfigError, FormgateError, FormgateResult, HandlerError, HandlerResult};
pub use params::Params;
pub use schema::Schema;
pub use validators::{FormErrors, Invalid, State, Validator};
