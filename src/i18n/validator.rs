//! Translation validation module.
//!
//! Checks a translated table against its source. Structural differences
//! (missing, extra or retyped keys) are errors: a table with a different shape
//! cannot be consumed by the site. Placeholders that went missing from a leaf are
//! only warnings, since wording is the model's responsibility.

use crate::table::StringTable;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems; the translation must not be written
    pub errors: Vec<String>,

    /// Non-critical issues worth logging
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated string tables.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate `translated` against `source`.
    ///
    /// Errors come from [`StringTable::shape_differences`]. For every leaf present in
    /// both tables (matched key by key, so dotted keys are fine), placeholders found in the source but not in the translation are
    /// reported as warnings.
    pub fn validate(source: &StringTable, translated: &StringTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.errors = source.shape_differences(translated);

        for (path, original, candidate) in source.paired_leaves(translated) {
            let expected = Self::extract_placeholders(original);
            if expected.is_empty() {
                continue;
            }
            let found = Self::extract_placeholders(candidate);
            let missing: Vec<_> = expected.difference(&found).cloned().collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "Placeholder mismatch at '{}': missing {:?}",
                    path, missing
                ));
            }
        }

        report
    }

    /// Extract format tokens: `{name}`, `{{name}}`, `%s`, `%d`, `%1$s`.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{\{\s*[\w.]+\s*\}\}|\{[\w.]+\}|%(?:\d+\$)?[sdif]")
                .expect("placeholder pattern is valid")
        });

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
