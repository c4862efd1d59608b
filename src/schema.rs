//! Whole-form schemas.
//!
//! A [`Schema`] validates the complete parameter set: every declared field
//! goes through its validator, failures are accumulated, and chained
//! validators check cross-field rules once all fields converted.
//!
//! ```rust
//! use formgate::schema::Schema;
//! use formgate::validators::{FieldsMatch, State, StringValidator};
//! use formgate::Params;
//!
//! let schema = Schema::new()
//!     .field("pwd1", StringValidator::new().not_empty())
//!     .field("pwd2", StringValidator::new().not_empty())
//!     .chained(FieldsMatch::new(["pwd1", "pwd2"]));
//!
//! let params = Params::from_pairs([("pwd1", "me"), ("pwd2", "you")]);
//! assert!(schema.validate(params, &State::default()).is_err());
//! ```

use crate::params::Params;
use crate::validators::{ChainedValidator, Invalid, Message, State, ValidationResult, Validator};
use log::trace;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Field validators plus cross-field rules.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Arc<dyn Validator>)>,
    chained_validators: Vec<Arc<dyn ChainedValidator>>,
    allow_extra_fields: bool,
    filter_extra_fields: bool,
}

impl Schema {
    /// Empty schema that rejects undeclared fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a field replaces its validator.
    pub fn field(self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.field_arc(name, Arc::new(validator))
    }

    /// Declare a field with a shared validator.
    pub fn field_arc(mut self, name: impl Into<String>, validator: Arc<dyn Validator>) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = validator,
            None => self.fields.push((name, validator)),
        }
        self
    }

    /// Add a validator run after all fields converted.
    pub fn chained(mut self, validator: impl ChainedValidator + 'static) -> Self {
        self.chained_validators.push(Arc::new(validator));
        self
    }

    /// Accept fields the schema does not declare.
    pub fn allow_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = allow;
        self
    }

    /// Drop undeclared fields from the result (implies allowing them).
    pub fn filter_extra_fields(mut self, filter: bool) -> Self {
        self.filter_extra_fields = filter;
        if filter {
            self.allow_extra_fields = true;
        }
        self
    }

    /// Declared field validators in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Arc<dyn Validator>)> {
        self.fields.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Validator for a declared field.
    pub fn validator_for(&self, name: &str) -> Option<&Arc<dyn Validator>> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, v)| v)
    }

    fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    /// Validate and convert a complete parameter set.
    pub fn validate(&self, params: Params, state: &State) -> ValidationResult<Params> {
        let mut errors: BTreeMap<String, Invalid> = BTreeMap::new();
        let mut result = Params::new();

        for (name, value) in params.iter() {
            if self.declares(name) {
                continue;
            }
            if !self.allow_extra_fields {
                errors.insert(
                    name.clone(),
                    Invalid::new(Message::new("not_expected").arg("name", name), Some(value)),
                );
            } else if !self.filter_extra_fields {
                result.insert(name.clone(), value.clone());
            }
        }

        for (name, validator) in &self.fields {
            let converted = match params.get(name) {
                Some(value) => validator.to_python(Some(value), state),
                None => match validator.if_missing() {
                    Some(default) => Ok(default),
                    None => Err(Invalid::key("missing_value", None)),
                },
            };
            match converted {
                Ok(value) => {
                    result.insert(name.clone(), value);
                }
                Err(invalid) => {
                    trace!(
                        "Schema field '{}' failed validation (request: '{}')",
                        name, state.request_id
                    );
                    errors.insert(name.clone(), invalid);
                }
            }
        }

        if !errors.is_empty() {
            return Err(Invalid::compound(errors));
        }

        self.chained_validators
            .iter()
            .try_fold(result, |values, validator| validator.validate(values, state))
    }
}
