//! Error taxonomy for a translation run.
//!
//! Only [`PreconditionError`] is allowed to end a run. Everything else is
//! scoped to a single locale and ends up as a failed entry in the run report.

use std::path::PathBuf;
use thiserror::Error;

/// Conditions checked before any locale is processed. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("{0} environment variable not set")]
    MissingCredential(&'static str),

    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read source file {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file {} is not a valid string table: {source}", path.display())]
    SourceInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown language code: '{0}'")]
    UnknownLocale(String),

    #[error("Invalid language code '{0}': use letters, digits, '-' or '_' only")]
    InvalidLocaleCode(String),

    #[error("No target locales requested")]
    NoTargets,

    #[error("Output for '{code}' would overwrite the source file {}", path.display())]
    TargetIsSource { code: String, path: PathBuf },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure talking to the translation endpoint.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Failed to send translation request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Translation API error ({status}): {body}")]
    Service {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse translation API response: {0}")]
    Envelope(String),

    #[error("Translation response contained no text content")]
    EmptyReply,
}

/// The reply could not be turned into a string table.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Reply is not a valid string table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything that can fail for one locale. Caught at the locale boundary.
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("Translated table does not match source structure: {}", .0.join("; "))]
    ShapeMismatch(Vec<String>),

    #[error("Failed to serialize translated table: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
