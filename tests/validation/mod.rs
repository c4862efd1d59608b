//! Controller validation scenarios.
//!
//! - [`decorators`] - Field validators, schemas and custom controller validators
//! - [`forms`] - Form widget validation, rendering and error handlers
//! - [`translation`] - Error messages negotiated from `Accept-Language`

pub mod decorators;
pub mod forms;
pub mod translation;
