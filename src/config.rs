use crate::error::PreconditionError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_SOURCE_FILE: &str = "src/i18n/en.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Translation endpoint
    pub api_key: String,
    pub api_url: String,
    pub api_version: String,
    pub model: String,
    pub max_tokens: u32,
    pub request_timeout: Duration,

    // Pacing between locales
    pub request_delay: Duration,

    // Files
    pub source_file: PathBuf,

    // Locales; empty means every registered target
    pub target_locales: Vec<String>,
    pub allow_unregistered: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Fails only when the API credential is missing; every other setting has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(PreconditionError::MissingCredential(API_KEY_VAR))?;

        Ok(Self {
            api_key,
            api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_version: std::env::var("ANTHROPIC_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            model: std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_tokens: std::env::var("MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(120),
            ),
            request_delay: Duration::from_millis(
                std::env::var("REQUEST_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
            source_file: source_file_from_env(),
            target_locales: target_locales_from_env(),
            allow_unregistered: std::env::var("ALLOW_UNREGISTERED_LOCALES")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Directory the locale files are written to (same as the source file).
    pub fn output_dir(&self) -> PathBuf {
        output_dir_for(&self.source_file)
    }

    /// Path of the output file for a locale code.
    pub fn target_path(&self, code: &str) -> PathBuf {
        self.output_dir().join(format!("{}.json", code))
    }
}

/// `SOURCE_FILE`, or the default source path.
pub fn source_file_from_env() -> PathBuf {
    std::env::var("SOURCE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_FILE))
}

/// `TARGET_LOCALES` as a list; empty when unset.
pub fn target_locales_from_env() -> Vec<String> {
    std::env::var("TARGET_LOCALES")
        .map(|v| parse_locale_list(&v))
        .unwrap_or_default()
}

/// Directory holding `source_file`, which is also where locale files go.
pub fn output_dir_for(source_file: &Path) -> PathBuf {
    match source_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Split a comma-separated locale list, dropping blanks and duplicates while keeping order.
pub fn parse_locale_list(raw: &str) -> Vec<String> {
    let mut locales: Vec<String> = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let code = code.to_ascii_lowercase();
        if !locales.contains(&code) {
            locales.push(code);
        }
    }
    locales
}
