//! Application configuration.

use crate::error::ConfigError;
use crate::i18n::{Locale, SUPPORTED_LOCALES};
use serde::{Deserialize, Serialize};

/// Dispatcher settings.
///
/// Every field has a default, so a config document only needs to name what
/// it changes:
///
/// ```rust
/// use formgate::app::AppConfig;
/// use formgate::i18n::Locale;
///
/// let config = AppConfig::from_json(r#"{ "default_locale": "ru" }"#).unwrap();
/// assert_eq!(config.default_locale, Locale::Ru);
/// assert_eq!(config.default_action, "index");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Locale used when negotiation finds no match
    pub default_locale: Locale,
    /// Locales offered during `Accept-Language` negotiation
    pub supported_locales: Vec<Locale>,
    /// Accepted request methods (compared case-insensitively)
    pub allowed_methods: Vec<String>,
    /// Action served for the empty path
    pub default_action: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            supported_locales: SUPPORTED_LOCALES.to_vec(),
            allowed_methods: vec!["GET".to_string(), "POST".to_string()],
            default_action: "index".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.supported_locales.contains(&self.default_locale) {
            return Err(ConfigError::UnsupportedDefaultLocale(
                self.default_locale.to_string(),
            ));
        }
        if self.allowed_methods.is_empty() {
            return Err(ConfigError::Invalid {
                message: "at least one request method must be allowed".to_string(),
            });
        }
        if self.default_action.is_empty() {
            return Err(ConfigError::Invalid {
                message: "default action name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn allows_method(&self, method: &str) -> bool {
        self.allowed_methods
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(method))
    }
}
