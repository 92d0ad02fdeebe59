//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations
//!
//! Catalog text (playlist titles, genres) is data and stays untranslated.

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Resolve a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Sidebar - primary menu
    NavDiscover,
    NavHome,
    NavBrowse,
    NavRadio,

    // Sidebar - library
    LibraryTitle,
    LibraryPlaylists,
    LibrarySongs,
    LibraryPersonalizedPicks,

    // Navigation bar
    Tab,
    CallToAction,

    // Content sections
    SectionTitle,
    SectionSubheading,
}

impl Key {
    /// Every key, used to check translation tables are complete
    #[cfg(test)]
    pub const ALL: [Key; 13] = [
        Key::AppName,
        Key::NavDiscover,
        Key::NavHome,
        Key::NavBrowse,
        Key::NavRadio,
        Key::LibraryTitle,
        Key::LibraryPlaylists,
        Key::LibrarySongs,
        Key::LibraryPersonalizedPicks,
        Key::Tab,
        Key::CallToAction,
        Key::SectionTitle,
        Key::SectionSubheading,
    ];
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_translates_every_key() {
        for &lang in Language::all() {
            for key in Key::ALL {
                assert_ne!(t(lang, key), "???", "{:?} missing {:?}", lang, key);
            }
        }
    }

    #[test]
    fn english_labels_match_the_mockup() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.get(Key::AppName), "Music app");
        assert_eq!(locale.get(Key::LibraryPersonalizedPicks), "Personalized picks");
        assert_eq!(locale.get(Key::CallToAction), "Call to action");
    }

    #[test]
    fn language_codes_round_trip_with_fallback() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code(" EN "), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
    }
}
