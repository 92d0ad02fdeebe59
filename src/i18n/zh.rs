//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "音乐");

    // Sidebar - primary menu
    m.insert(Key::NavDiscover, "发现");
    m.insert(Key::NavHome, "首页");
    m.insert(Key::NavBrowse, "浏览");
    m.insert(Key::NavRadio, "电台");

    // Sidebar - library
    m.insert(Key::LibraryTitle, "音乐库");
    m.insert(Key::LibraryPlaylists, "歌单");
    m.insert(Key::LibrarySongs, "歌曲");
    m.insert(Key::LibraryPersonalizedPicks, "个性推荐");

    // Navigation bar
    m.insert(Key::Tab, "标签");
    m.insert(Key::CallToAction, "立即行动");

    // Content sections
    m.insert(Key::SectionTitle, "标题");
    m.insert(Key::SectionSubheading, "副标题");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
