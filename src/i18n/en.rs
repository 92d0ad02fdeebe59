//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Music app");

    // Sidebar - primary menu
    m.insert(Key::NavDiscover, "Discover");
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavBrowse, "Browse");
    m.insert(Key::NavRadio, "Radio");

    // Sidebar - library
    m.insert(Key::LibraryTitle, "Library");
    m.insert(Key::LibraryPlaylists, "Playlists");
    m.insert(Key::LibrarySongs, "Songs");
    m.insert(Key::LibraryPersonalizedPicks, "Personalized picks");

    // Navigation bar
    m.insert(Key::Tab, "Tab");
    m.insert(Key::CallToAction, "Call to action");

    // Content sections
    m.insert(Key::SectionTitle, "Title");
    m.insert(Key::SectionSubheading, "Subheading");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
