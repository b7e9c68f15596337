//! Language definitions and the supported-language catalog.

use serde::{Deserialize, Serialize};

/// Languages the content graph can be served in.
///
/// `En` is the default language: every node is expected to exist at least
/// in the default language, and it is the fallback target whenever a
/// requested language has no variant of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Fa,
}

impl Language {
    /// All supported languages, in catalog order.
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Ar, Language::Fa]
    }

    /// The code used in external rows and cache keys.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fa => "fa",
        }
    }

    /// Parse a row's language code. Unknown codes return `None` so the
    /// caller can skip the row instead of guessing.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            "fa" => Some(Language::Fa),
            _ => None,
        }
    }

    /// Catalog entry for this language.
    pub fn info(&self) -> LanguageInfo {
        let (name, native_name) = match self {
            Language::En => ("English", "English"),
            Language::Ar => ("Arabic", "العربية"),
            Language::Fa => ("Persian", "فارسی"),
        };
        LanguageInfo {
            code: self.code().to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }

    /// The full supported-language catalog.
    pub fn catalog() -> Vec<LanguageInfo> {
        Language::all().iter().map(Language::info).collect()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One entry of the supported-language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_code_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_from_code_normalizes() {
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("Fa"), Some(Language::Fa));
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_catalog_covers_all_languages() {
        let catalog = Language::catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].code, "en");
        assert_eq!(catalog[1].native_name, "العربية");
        assert_eq!(catalog[2].name, "Persian");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Ar.to_string(), "ar");
    }
}
