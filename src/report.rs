//! Per-run outcome aggregation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outcome of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded { path: PathBuf },
    Failed { reason: String },
}

/// One entry per attempted locale, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub locale: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl RunResult {
    pub fn succeeded(locale: impl Into<String>, path: PathBuf) -> Self {
        Self {
            locale: locale.into(),
            outcome: Outcome::Succeeded { path },
        }
    }

    pub fn failed(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            outcome: Outcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded { .. })
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub results: Vec<RunResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, result: RunResult) {
        self.results.push(result);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Codes of the failed locales, in processing order.
    pub fn failed_locales(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.is_success())
            .map(|r| r.locale.as_str())
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Translation Summary")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Successful: {}/{}", self.succeeded(), self.total())?;
        if self.failed() > 0 {
            writeln!(f, "Failed: {}/{}", self.failed(), self.total())?;
            writeln!(f, "   Languages: {}", self.failed_locales().join(", "))?;
        }
        Ok(())
    }
}
