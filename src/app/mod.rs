//! Request dispatcher.
//!
//! [`Application::handle`] runs one request through routing, locale
//! negotiation, validation, the handler and rendering. Validation failures do
//! not abort the request: the translated errors and raw values are placed in
//! the [`RequestContext`] and control passes to the action's error handler,
//! or to the action itself when none is configured.

mod config;
mod http;

pub use config::AppConfig;
pub use http::{FORM_CONTENT_TYPE, Request, Response};

use crate::context::RequestContext;
use crate::controller::{Action, Controller};
use crate::error::{ConfigError, FormgateError, FormgateResult};
use crate::i18n::{Locale, negotiate};
use crate::params::Params;
use log::{debug, info, warn};
use uuid::Uuid;

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Dispatches requests to a controller's actions.
#[derive(Debug, Clone)]
pub struct Application {
    controller: Controller,
    config: AppConfig,
}

impl Application {
    /// Create an application with the default configuration.
    pub fn new(controller: Controller) -> FormgateResult<Self> {
        Self::with_config(controller, AppConfig::default())
    }

    /// Create an application with a specific configuration.
    pub fn with_config(controller: Controller, config: AppConfig) -> FormgateResult<Self> {
        config.validate()?;
        Ok(Self { controller, config })
    }

    pub fn builder(controller: Controller) -> ApplicationBuilder {
        ApplicationBuilder {
            controller,
            config: AppConfig::default(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle one request.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported methods, unknown paths, undecodable
    /// bodies and handler failures. Validation failures are not errors.
    pub fn handle(&self, request: Request) -> FormgateResult<Response> {
        let request_id = request
            .header_value(REQUEST_ID_HEADER)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if !self.config.allows_method(&request.method) {
            warn!(
                "Rejected method {} for {} (request: '{}')",
                request.method, request.path, request_id
            );
            return Err(FormgateError::MethodNotAllowed {
                method: request.method,
            });
        }

        let action_name = self.route(&request.path)?;
        let action = self.lookup(&action_name, &request.path)?;

        let locale = negotiate(
            request.header_value("accept-language"),
            &self.config.supported_locales,
            self.config.default_locale,
        );

        info!(
            "Dispatching {} {} to '{}' (locale: {}, request: '{}')",
            request.method, request.path, action_name, locale, request_id
        );

        let params = request.params()?;
        let mut context = RequestContext::new(request_id, locale);
        context.action = action_name.clone();
        context.headers = request
            .headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
            .collect();

        let (target_name, target, args) = self.validate(&action_name, action, params, &mut context)?;

        let output = target
            .call(&context, &args)
            .map_err(|source| {
                warn!(
                    "Handler '{}' failed: {} (request: '{}')",
                    target_name, source, context.request_id
                );
                FormgateError::Handler {
                    action: target_name.clone(),
                    source,
                }
            })?;

        let body = target.expose().render(output)?;
        debug!(
            "Handler '{}' completed successfully (request: '{}')",
            target_name, context.request_id
        );
        Ok(Response::ok(target.expose().content_type(), body))
    }

    /// Run the action's validation and pick the action that handles the request.
    fn validate<'a>(
        &'a self,
        action_name: &str,
        action: &'a Action,
        params: Params,
        context: &mut RequestContext,
    ) -> FormgateResult<(String, &'a Action, Params)> {
        let Some(validate) = action.validation() else {
            return Ok((action_name.to_string(), action, params));
        };

        let invalid = match validate.run(&self.controller, params.clone(), &context.state()) {
            Ok(converted) => return Ok((action_name.to_string(), action, converted)),
            Err(invalid) => invalid,
        };

        context.form_errors = invalid.unpack_errors(context.locale);
        context.form_values = params.clone();
        debug!(
            "Validation failed for '{}' on fields {:?} (request: '{}')",
            action_name,
            context.form_errors.keys().collect::<Vec<_>>(),
            context.request_id
        );

        match validate.error_handler_name() {
            Some(handler_name) => {
                let handler = self.controller.action(handler_name).ok_or_else(|| {
                    ConfigError::UnknownErrorHandler {
                        action: action_name.to_string(),
                        error_handler: handler_name.to_string(),
                    }
                })?;
                info!(
                    "Delegating '{}' to error handler '{}' (request: '{}')",
                    action_name, handler_name, context.request_id
                );
                Ok((handler_name.to_string(), handler, params))
            }
            None => Ok((action_name.to_string(), action, params)),
        }
    }

    /// Map a request path to an action name.
    fn route(&self, path: &str) -> FormgateResult<String> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(self.config.default_action.clone()),
            [name] => Ok((*name).to_string()),
            _ => Err(FormgateError::NotFound {
                path: path.to_string(),
            }),
        }
    }

    fn lookup(&self, action_name: &str, path: &str) -> FormgateResult<&Action> {
        self.controller
            .action(action_name)
            .ok_or_else(|| FormgateError::NotFound {
                path: path.to_string(),
            })
    }
}

/// Builder for [`Application`].
#[derive(Debug)]
pub struct ApplicationBuilder {
    controller: Controller,
    config: AppConfig,
}

impl ApplicationBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.config.default_locale = locale;
        self
    }

    pub fn supported_locales(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
        self.config.supported_locales = locales.into_iter().collect();
        self
    }

    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_action(mut self, name: impl Into<String>) -> Self {
        self.config.default_action = name.into();
        self
    }

    /// Validate the configuration and build the application.
    pub fn build(self) -> FormgateResult<Application> {
        Application::with_config(self.controller, self.config)
    }
}
