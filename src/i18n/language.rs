//! Locale descriptor: a code paired with the display name used in prompts.

use crate::error::PreconditionError;
use crate::i18n::LanguageRegistry;
use tracing::warn;

/// A target locale for one run.
///
/// Built once when the run starts and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    name: String,
}

impl Locale {
    /// Create a Locale from a registered language code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry
    /// * `Err(PreconditionError::UnknownLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, PreconditionError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale {
                code: config.code.to_string(),
                name: config.name.to_string(),
            }),
            None => Err(PreconditionError::UnknownLocale(code.to_string())),
        }
    }

    /// Create a Locale with an explicit display name, bypassing the registry's name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Locale {
        Locale {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Create a Locale for any code, falling back to the code itself as the display name
    /// when it is not registered.
    pub fn lenient(code: &str) -> Locale {
        Self::from_code(code).unwrap_or_else(|_| {
            warn!(
                "Language code '{}' is not registered; using the code as its display name",
                code
            );
            Locale {
                code: code.to_string(),
                name: code.to_string(),
            }
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Whether `code` can name an output file on its own: ASCII letters, digits, `-` or `_`.
fn is_plain_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Turn requested codes into locales, checking registry membership up front.
///
/// An empty request selects every registered target. With `allow_unregistered`,
/// unknown codes are kept (with a warning) instead of rejected.
pub fn resolve_locales(
    codes: &[String],
    allow_unregistered: bool,
) -> Result<Vec<Locale>, PreconditionError> {
    let registry = LanguageRegistry::get();

    if codes.is_empty() {
        return Ok(registry
            .targets()
            .into_iter()
            .map(|config| Locale {
                code: config.code.to_string(),
                name: config.name.to_string(),
            })
            .collect());
    }

    let canonical = registry.canonical().code;
    let mut locales = Vec::with_capacity(codes.len());
    for code in codes {
        if !is_plain_code(code) {
            return Err(PreconditionError::InvalidLocaleCode(code.clone()));
        }
        if code == canonical {
            warn!("Skipping '{}': it is the source language", code);
            continue;
        }
        let locale = if allow_unregistered {
            Locale::lenient(code)
        } else {
            Locale::from_code(code)?
        };
        locales.push(locale);
    }

    if locales.is_empty() {
        return Err(PreconditionError::NoTargets);
    }
    Ok(locales)
}
