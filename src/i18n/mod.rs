//! Languages and translation checks.
//!
//! - `registry`: the fixed table of supported languages
//! - `language`: `Locale`, the code/name pair a run targets
//! - `validator`: structural and placeholder checks on a translated table
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_translate::i18n::{resolve_locales, LanguageRegistry};
//!
//! let german = LanguageRegistry::get().name_for("de"); // Some("German")
//! let locales = resolve_locales(&["de".to_string(), "fr".to_string()], false)?;
//! ```

mod language;
mod registry;
mod validator;

pub use language::{resolve_locales, Locale};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{TranslationValidator, ValidationReport};
