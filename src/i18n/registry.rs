//! Language registry: the fixed table of locales this tool can target.
//!
//! The table is built once behind a `OnceLock` and never changes afterwards.
//! The canonical entry is the language the source file is authored in.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language, used in prompts (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Whether this is the source language (exactly one entry)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Display name for a code, or `None` when the code is not registered.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.get_by_code(code).map(|lang| lang.name)
    }

    /// Every registered language, canonical first.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Every non-canonical language, in registry order. This is the default target set.
    pub fn targets(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| !lang.is_canonical)
            .collect()
    }

    /// The canonical (source) language.
    pub fn canonical(&self) -> &LanguageConfig {
        // default_languages() always starts with the canonical entry
        &self.languages[0]
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageConfig {
        LanguageConfig {
            code,
            name,
            native_name,
            is_canonical: false,
        }
    }

    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        lang("es", "Spanish", "Español"),
        lang("fr", "French", "Français"),
        lang("de", "German", "Deutsch"),
        lang("it", "Italian", "Italiano"),
        lang("pt", "Portuguese", "Português"),
        lang("nl", "Dutch", "Nederlands"),
        lang("sv", "Swedish", "Svenska"),
        lang("da", "Danish", "Dansk"),
        lang("fi", "Finnish", "Suomi"),
        lang("no", "Norwegian", "Norsk"),
        lang("pl", "Polish", "Polski"),
        lang("cs", "Czech", "Čeština"),
        lang("sk", "Slovak", "Slovenčina"),
        lang("hu", "Hungarian", "Magyar"),
        lang("ro", "Romanian", "Română"),
        lang("bg", "Bulgarian", "Български"),
        lang("hr", "Croatian", "Hrvatski"),
        lang("sl", "Slovenian", "Slovenščina"),
        lang("et", "Estonian", "Eesti"),
        lang("lv", "Latvian", "Latviešu"),
        lang("lt", "Lithuanian", "Lietuvių"),
        lang("el", "Greek", "Ελληνικά"),
        lang("mt", "Maltese", "Malti"),
        lang("id", "Indonesian", "Bahasa Indonesia"),
    ]
}
