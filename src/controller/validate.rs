//! Validation attached to an action.

use super::core::Controller;
use crate::params::Params;
use crate::schema::Schema;
use crate::validators::{Invalid, State, ValidationResult, Validator};
use crate::widgets::TableForm;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Custom validation supplied by the application.
///
/// Receives the controller the action belongs to, so it can consult other
/// actions or controller-level configuration.
pub trait ControllerValidator: Debug + Send + Sync {
    fn validate(
        &self,
        controller: &Controller,
        params: Params,
        state: &State,
    ) -> ValidationResult<Params>;
}

/// Ordered field name to validator mapping.
///
/// Only listed fields are checked; all other parameters pass through as
/// submitted.
#[derive(Debug, Clone, Default)]
pub struct FieldValidators {
    fields: Vec<(String, Arc<dyn Validator>)>,
}

impl FieldValidators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.fields.push((name.into(), Arc::new(validator)));
        self
    }

    fn validate(&self, mut params: Params, state: &State) -> ValidationResult<Params> {
        let mut errors = BTreeMap::new();
        for (name, validator) in &self.fields {
            match validator.to_python(params.get(name), state) {
                Ok(value) => {
                    params.insert(name.clone(), value);
                }
                Err(invalid) => {
                    errors.insert(name.clone(), invalid);
                }
            }
        }
        if errors.is_empty() {
            Ok(params)
        } else {
            Err(Invalid::compound(errors))
        }
    }
}

/// The kind of validation an action performs.
#[derive(Clone)]
pub enum Validation {
    /// Per-field validators; unlisted fields pass through
    Fields(FieldValidators),
    /// Whole-form schema with cross-field rules
    Schema(Arc<Schema>),
    /// A form widget's own field validators
    Form(Arc<TableForm>),
    /// Application-supplied validation logic
    Controller(Arc<dyn ControllerValidator>),
}

impl Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Validation::Schema(schema) => f.debug_tuple("Schema").field(schema).finish(),
            Validation::Form(form) => f.debug_tuple("Form").field(&form.id()).finish(),
            Validation::Controller(v) => f.debug_tuple("Controller").field(v).finish(),
        }
    }
}

/// Validation decoration for an action, with an optional error handler.
#[derive(Debug, Clone)]
pub struct Validate {
    validation: Validation,
    error_handler: Option<String>,
}

impl Validate {
    fn with(validation: Validation) -> Self {
        Self {
            validation,
            error_handler: None,
        }
    }

    /// Validate individual fields.
    pub fn fields(fields: FieldValidators) -> Self {
        Self::with(Validation::Fields(fields))
    }

    /// Validate the whole submission with a schema.
    pub fn schema(schema: Schema) -> Self {
        Self::with(Validation::Schema(Arc::new(schema)))
    }

    /// Validate with a form widget's fields.
    pub fn form(form: Arc<TableForm>) -> Self {
        Self::with(Validation::Form(form))
    }

    /// Validate with application-supplied logic.
    pub fn controller(validator: impl ControllerValidator + 'static) -> Self {
        Self::with(Validation::Controller(Arc::new(validator)))
    }

    /// Send failed submissions to another action of the same controller.
    pub fn error_handler(mut self, action: impl Into<String>) -> Self {
        self.error_handler = Some(action.into());
        self
    }

    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    pub fn error_handler_name(&self) -> Option<&str> {
        self.error_handler.as_deref()
    }

    /// Run the validation against submitted parameters.
    pub fn run(
        &self,
        controller: &Controller,
        params: Params,
        state: &State,
    ) -> ValidationResult<Params> {
        match &self.validation {
            Validation::Fields(fields) => fields.validate(params, state),
            Validation::Schema(schema) => schema.validate(params, state),
            Validation::Form(form) => form.validate(params, state),
            Validation::Controller(validator) => validator.validate(controller, params, state),
        }
    }
}
