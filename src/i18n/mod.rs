//! Locale negotiation and validation message translation.
//!
//! Validators never produce final text. They report a message key with named
//! arguments, and the dispatcher translates it for the locale negotiated from
//! the request's `Accept-Language` header.
//!
//! ```rust
//! use formgate::i18n::{Locale, negotiate, translate};
//!
//! let locale = negotiate(Some("ru-RU;q=0.9, en;q=0.5"), &[Locale::En, Locale::Ru], Locale::En);
//! assert_eq!(locale, Locale::Ru);
//! assert_eq!(translate(locale, "integer", &[]), "Введите числовое значение");
//! ```

mod catalog;

pub use catalog::catalog_entries_for;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Locales with a message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the baseline catalog
    #[default]
    En,
    /// Russian
    Ru,
    /// German
    De,
}

/// All locales shipped with a catalog.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ru, Locale::De];

impl Locale {
    /// The primary language subtag for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    /// Parse a language tag; region subtags are ignored (`ru-RU` is `ru`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            "de" => Ok(Locale::De),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

static CATALOGS: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        SUPPORTED_LOCALES
            .iter()
            .map(|locale| {
                (
                    *locale,
                    catalog_entries_for(*locale).iter().copied().collect(),
                )
            })
            .collect()
    });

/// Lookup table for a locale's catalog.
pub fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    // Every variant is inserted by the initializer.
    &CATALOGS[&locale]
}

/// Translate a message key, substituting `{name}` placeholders from `args`.
///
/// Unknown keys fall back to the English catalog and then to the key itself.
pub fn translate(locale: Locale, key: &str, args: &[(String, String)]) -> String {
    let template = catalog_for(locale)
        .get(key)
        .or_else(|| catalog_for(Locale::En).get(key))
        .copied()
        .unwrap_or(key);
    interpolate(template, args)
}

fn interpolate(template: &str, args: &[(String, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Pick the best supported locale for an `Accept-Language` header value.
///
/// Entries are weighted by their `q` parameter (default 1.0); entries with
/// `q=0` are ignored. Ties keep header order. `*` matches the default.
pub fn negotiate(accept_language: Option<&str>, supported: &[Locale], default: Locale) -> Locale {
    let Some(header) = accept_language else {
        return default;
    };

    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = parts
                .filter_map(|param| param.trim().split_once('='))
                .filter(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                .find_map(|(_, q)| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag, quality))
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    // sort_by is stable, so equal weights keep header order
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (tag, _) in ranges {
        if tag == "*" {
            return default;
        }
        if let Ok(locale) = tag.parse::<Locale>() {
            if supported.contains(&locale) {
                return locale;
            }
        }
    }
    default
}
