//! Scaffold mode: seed missing locale files with a copy of the source.
//!
//! Useful before translating by hand or to give the site a file for every locale
//! right away. Existing files are never touched and no request is sent.

use crate::i18n::Locale;
use crate::pipeline::load_source;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Files created and files left alone by a scaffold pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Copy `source_file` verbatim to `<dir>/<code>.json` for every locale whose file is missing.
pub fn scaffold(source_file: &Path, output_dir: &Path, locales: &[Locale]) -> Result<ScaffoldSummary> {
    // Refuse to copy a source that would fail a real run
    load_source(source_file)?;
    let contents = std::fs::read(source_file)
        .with_context(|| format!("Failed to read {}", source_file.display()))?;

    let mut summary = ScaffoldSummary::default();
    for locale in locales {
        let path = output_dir.join(format!("{}.json", locale.code()));

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                info!("Keeping existing {}", path.display());
                summary.skipped.push(path);
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", path.display()))
            }
        };

        file.write_all(&contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Created {}", path.display());
        summary.created.push(path);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreconditionError;
    use tempfile::TempDir;

    const SOURCE: &str = "{\n  \"a\": \"Hello\"\n}\n";

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("temp dir");
        let source = dir.path().join("en.json");
        std::fs::write(&source, SOURCE).expect("write source");
        (dir, source)
    }

    #[test]
    fn test_scaffold_creates_missing_files() {
        let (dir, source) = setup();
        let locales = vec![Locale::from_code("de").unwrap(), Locale::from_code("fr").unwrap()];

        let summary = scaffold(&source, dir.path(), &locales).expect("Should scaffold");

        assert_eq!(summary.created.len(), 2);
        assert!(summary.skipped.is_empty());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("de.json")).unwrap(),
            SOURCE
        );
    }

    #[test]
    fn test_scaffold_never_overwrites() {
        let (dir, source) = setup();
        std::fs::write(dir.path().join("de.json"), "{\"a\": \"Hallo\"}").expect("write");
        let locales = vec![Locale::from_code("de").unwrap(), Locale::from_code("es").unwrap()];

        let summary = scaffold(&source, dir.path(), &locales).expect("Should scaffold");

        assert_eq!(summary.created, vec![dir.path().join("es.json")]);
        assert_eq!(summary.skipped, vec![dir.path().join("de.json")]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("de.json")).unwrap(),
            "{\"a\": \"Hallo\"}"
        );
    }

    #[test]
    fn test_scaffold_rejects_invalid_source() {
        let dir = TempDir::new().expect("temp dir");
        let source = dir.path().join("en.json");
        std::fs::write(&source, "[1, 2, 3]").expect("write");

        let err = scaffold(&source, dir.path(), &[Locale::from_code("de").unwrap()]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PreconditionError>(),
            Some(PreconditionError::SourceInvalid { .. })
        ));
        assert!(!dir.path().join("de.json").exists());
    }
}
