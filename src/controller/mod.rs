//! Controllers, actions and their validation decoration.
//!
//! An [`Action`] pairs a handler closure with an [`Expose`] rendering and an
//! optional [`Validate`]. Actions are grouped into a [`Controller`], which the
//! [`crate::Application`] dispatches requests to.
//!
//! # Examples
//!
//! ```rust
//! use formgate::controller::{Action, Controller, Expose, FieldValidators, Output, Validate};
//! use formgate::validators::Int;
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
//! # Ok(())
//! # }
//! ```

mod core;
mod expose;
mod validate;

pub use self::core::{Action, Controller, ControllerBuilder, Handler};
pub use expose::{Expose, Output};
pub use validate::{ControllerValidator, FieldValidators, Validate, Validation};
