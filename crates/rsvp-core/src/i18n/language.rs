use serde::{Deserialize, Serialize};

/// Preference storage key holding the language code.
pub const LANGUAGE_STORAGE_KEY: &str = "wedding_lang";

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            _ => None,
        }
    }

    /// Korean for any `ko` locale (`ko`, `ko-KR`, `ko_KR.UTF-8`), English otherwise.
    pub fn from_locale(locale: &str) -> Self {
        let prefix = locale.trim().get(..2);
        if prefix.is_some_and(|prefix| prefix.eq_ignore_ascii_case("ko")) {
            Language::Ko
        } else {
            Language::En
        }
    }

    /// Initial language: stored preference, then locale, then English.
    /// A stored value that is not a known code counts as absent.
    pub fn resolve(stored: Option<&str>, locale: Option<&str>) -> Self {
        stored
            .and_then(Self::from_code)
            .or_else(|| locale.map(Self::from_locale))
            .unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
