//! Locale pipeline: drives one translation run.
//!
//! Preconditions (credential, source file, locale list) are checked before any
//! request is sent. After that, each locale is processed on its own: a failure is
//! logged, recorded in the report, and the run moves on. A file is only written
//! once the reply has been fully normalized and validated, and the write replaces
//! the previous file in a single rename.

use crate::anthropic;
use crate::config::Config;
use crate::error::{LocaleError, PreconditionError};
use crate::i18n::{resolve_locales, Locale, TranslationValidator};
use crate::normalize;
use crate::report::{RunReport, RunResult};
use crate::table::StringTable;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Read and parse the source string table.
pub fn load_source(path: &Path) -> Result<StringTable, PreconditionError> {
    if !path.is_file() {
        return Err(PreconditionError::SourceNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| {
        PreconditionError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    StringTable::from_json(&text).map_err(|source| PreconditionError::SourceInvalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a full translation pass as described by `config`.
///
/// Returns `Err` only for precondition failures; per-locale failures are in the report.
pub async fn run(config: &Config) -> Result<RunReport, PreconditionError> {
    let source = load_source(&config.source_file)?;
    let locales = resolve_locales(&config.target_locales, config.allow_unregistered)?;
    ensure_source_untouched(config, &locales)?;
    let client = anthropic::build_client(config).map_err(PreconditionError::HttpClient)?;

    info!(
        "Source file: {} ({} strings)",
        config.source_file.display(),
        source.leaf_count()
    );
    info!(
        "Target languages: {}",
        locales
            .iter()
            .map(Locale::code)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(translate_all(&client, config, &source, &locales).await)
}

/// Refuse any locale whose output path resolves to the source file itself.
pub fn ensure_source_untouched(config: &Config, locales: &[Locale]) -> Result<(), PreconditionError> {
    let source = std::fs::canonicalize(&config.source_file).map_err(|source| {
        PreconditionError::SourceUnreadable {
            path: config.source_file.clone(),
            source,
        }
    })?;

    for locale in locales {
        let target = config.target_path(locale.code());
        // A target that does not exist yet cannot be the source
        let Ok(target) = std::fs::canonicalize(&target) else {
            continue;
        };
        if target == source {
            return Err(PreconditionError::TargetIsSource {
                code: locale.code().to_string(),
                path: config.source_file.clone(),
            });
        }
    }
    Ok(())
}

/// Translate `source` into each locale in order, pausing between locales.
pub async fn translate_all(
    client: &reqwest::Client,
    config: &Config,
    source: &StringTable,
    locales: &[Locale],
) -> RunReport {
    let mut report = RunReport::new();

    for (index, locale) in locales.iter().enumerate() {
        info!("Translating to {} ({})...", locale.name(), locale.code());

        match translate_locale(client, config, source, locale).await {
            Ok(path) => {
                info!(
                    "Successfully translated to {} -> {}",
                    locale.code(),
                    path.display()
                );
                report.record(RunResult::succeeded(locale.code(), path));
            }
            Err(e) => {
                error!("Error translating to {}: {}", locale.code(), e);
                report.record(RunResult::failed(locale.code(), e.to_string()));
            }
        }

        // Respect the endpoint's rate limits
        if index + 1 < locales.len() && !config.request_delay.is_zero() {
            debug!("Waiting {:?} before next locale", config.request_delay);
            tokio::time::sleep(config.request_delay).await;
        }
    }

    report.finish();
    report
}

/// Translate, normalize, validate and persist one locale.
///
/// Nothing is written unless every earlier step succeeds.
pub async fn translate_locale(
    client: &reqwest::Client,
    config: &Config,
    source: &StringTable,
    locale: &Locale,
) -> Result<PathBuf, LocaleError> {
    let source_json = source.to_pretty_json().map_err(LocaleError::Serialize)?;

    let reply = anthropic::translate(client, config, &source_json, locale).await?;
    let translated = normalize::normalize(&reply)?;

    let validation = TranslationValidator::validate(source, &translated);
    if validation.has_warnings() {
        warn!(
            "Translation validation warnings for {} ({}): {:?}",
            locale.name(),
            locale.code(),
            validation.warnings
        );
    }
    if validation.has_errors() {
        return Err(LocaleError::ShapeMismatch(validation.errors));
    }

    let path = config.target_path(locale.code());
    let contents = translated.to_pretty_json().map_err(LocaleError::Serialize)?;
    write_atomic(&path, &contents).map_err(|source| LocaleError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Replace `path` with `contents` (plus a trailing newline) via a temp file in the same
/// directory, so readers never see a partially written file.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
