//! Controllers and their actions.

use super::expose::{Expose, Output};
use super::validate::Validate;
use crate::context::RequestContext;
use crate::error::{ConfigError, HandlerResult};
use crate::params::Params;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handler closure invoked with the request context and the (validated) parameters.
pub type Handler = Arc<dyn Fn(&RequestContext, &Params) -> HandlerResult<Output> + Send + Sync>;

/// An exposed controller action.
#[derive(Clone)]
pub struct Action {
    expose: Expose,
    validate: Option<Validate>,
    handler: Handler,
}

impl Action {
    /// Expose `handler` with the given rendering.
    pub fn new<F>(expose: Expose, handler: F) -> Self
    where
        F: Fn(&RequestContext, &Params) -> HandlerResult<Output> + Send + Sync + 'static,
    {
        Self {
            expose,
            validate: None,
            handler: Arc::new(handler),
        }
    }

    /// Attach validation to run before the handler.
    pub fn validate(mut self, validate: Validate) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn expose(&self) -> Expose {
        self.expose
    }

    pub fn validation(&self) -> Option<&Validate> {
        self.validate.as_ref()
    }

    pub(crate) fn call(&self, context: &RequestContext, params: &Params) -> HandlerResult<Output> {
        (self.handler)(context, params)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("expose", &self.expose)
            .field("validate", &self.validate)
            .finish_non_exhaustive()
    }
}

/// A named collection of actions.
#[derive(Debug, Clone)]
pub struct Controller {
    name: String,
    actions: HashMap<String, Action>,
}

impl Controller {
    pub fn builder(name: impl Into<String>) -> ControllerBuilder {
        ControllerBuilder {
            name: name.into(),
            actions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }

    /// Registered action names, sorted.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Builder for [`Controller`].
#[derive(Debug)]
pub struct ControllerBuilder {
    name: String,
    actions: Vec<(String, Action)>,
}

impl ControllerBuilder {
    /// Register an action under `name`.
    pub fn action(mut self, name: impl Into<String>, action: Action) -> Self {
        self.actions.push((name.into(), action));
        self
    }

    /// Build the controller.
    ///
    /// # Errors
    ///
    /// Fails when an action name is registered twice or an error handler
    /// names an action that does not exist.
    pub fn build(self) -> Result<Controller, ConfigError> {
        let mut actions = HashMap::with_capacity(self.actions.len());
        for (name, action) in self.actions {
            if actions.contains_key(&name) {
                return Err(ConfigError::DuplicateAction(name));
            }
            actions.insert(name, action);
        }

        for (name, action) in &actions {
            if let Some(handler) = action.validate.as_ref().and_then(Validate::error_handler_name) {
                if !actions.contains_key(handler) {
                    return Err(ConfigError::UnknownErrorHandler {
                        action: name.clone(),
                        error_handler: handler.to_string(),
                    });
                }
            }
        }

        debug!(
            "Built controller '{}' with {} actions",
            self.name,
            actions.len()
        );
        Ok(Controller {
            name: self.name,
            actions,
        })
    }
}
