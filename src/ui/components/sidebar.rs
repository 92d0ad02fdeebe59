//! Left sidebar navigation component
//! Light panel with app title, primary menu and library section.
//!
//! The active entry is fixed demo data; it is not tied to any selection.

use iced::widget::{Space, column, container, mouse_area, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{HoverTarget, Message};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, ClassList, MEDIUM_WEIGHT, class};

/// Sidebar menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Discover,
    Home,
    Browse,
    Radio,
    Playlists,
    Songs,
    PersonalizedPicks,
}

impl MenuEntry {
    pub fn i18n_key(&self) -> Key {
        match self {
            MenuEntry::Discover => Key::NavDiscover,
            MenuEntry::Home => Key::NavHome,
            MenuEntry::Browse => Key::NavBrowse,
            MenuEntry::Radio => Key::NavRadio,
            MenuEntry::Playlists => Key::LibraryPlaylists,
            MenuEntry::Songs => Key::LibrarySongs,
            MenuEntry::PersonalizedPicks => Key::LibraryPersonalizedPicks,
        }
    }

    /// Discover is a heading-style entry without a glyph
    pub fn icon_svg(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Discover => None,
            MenuEntry::Home => Some(icons::HOME),
            MenuEntry::Browse => Some(icons::BROWSE),
            MenuEntry::Radio => Some(icons::RADIO),
            MenuEntry::Playlists => Some(icons::PLAYLISTS),
            MenuEntry::Songs => Some(icons::SONGS),
            MenuEntry::PersonalizedPicks => Some(icons::PERSONALIZED),
        }
    }
}

/// One row of the sidebar menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub entry: MenuEntry,
    pub has_icon: bool,
    pub is_active: bool,
}

impl MenuItem {
    fn new(entry: MenuEntry) -> Self {
        Self {
            entry,
            has_icon: entry.icon_svg().is_some(),
            is_active: false,
        }
    }

    fn active(self) -> Self {
        Self {
            is_active: true,
            ..self
        }
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new(class::MENU_ITEM)
            .with_if(self.is_active, class::ACTIVE)
            .with_if(self.entry == MenuEntry::Discover, class::DISCOVER)
    }

    pub fn icon(&self) -> Option<&'static str> {
        if self.has_icon {
            self.entry.icon_svg()
        } else {
            None
        }
    }
}

/// Structure of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    pub title: Key,
    pub primary: Vec<MenuItem>,
    pub library_header: Key,
    pub library: Vec<MenuItem>,
}

impl SidebarModel {
    pub fn classes(&self) -> ClassList {
        ClassList::new(class::SIDEBAR)
    }

    /// Primary entries followed by library entries
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.primary.iter().chain(self.library.iter())
    }
}

/// Build the sidebar structure
pub fn model() -> SidebarModel {
    SidebarModel {
        title: Key::AppName,
        primary: vec![
            MenuItem::new(MenuEntry::Discover),
            MenuItem::new(MenuEntry::Home).active(),
            MenuItem::new(MenuEntry::Browse),
            MenuItem::new(MenuEntry::Radio),
        ],
        library_header: Key::LibraryTitle,
        library: vec![
            MenuItem::new(MenuEntry::Playlists),
            MenuItem::new(MenuEntry::Songs),
            MenuItem::new(MenuEntry::PersonalizedPicks),
        ],
    }
}

/// Render the sidebar
pub fn view(
    model: &SidebarModel,
    locale: Locale,
    animations: &HoverAnimations<HoverTarget>,
    width: f32,
) -> Element<'static, Message> {
    let title = container(text(locale.get(model.title)).size(22).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }))
    .padding(Padding::new(8.0).bottom(24.0));

    let menu = |items: &[MenuItem]| {
        column(items.iter().map(|item| {
            let hover = animations.progress(&HoverTarget::Menu(item.entry));
            menu_item(item, locale.get(item.entry.i18n_key()), hover)
        }))
        .spacing(4)
    };

    let library_header = text(locale.get(model.library_header))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        })
        .width(Fill);

    let content = column![
        title,
        menu(&model.primary),
        Space::new().height(28),
        container(library_header).padding(Padding::new(0.0).left(12.0).bottom(8.0)),
        menu(&model.library),
    ]
    .padding(16)
    .width(width);

    let classes = model.classes();
    container(content)
        .width(width)
        .height(Fill)
        .style(move |theme| theme::classed(theme, &classes, 0.0))
        .into()
}

/// A single menu row with hover highlight
fn menu_item(item: &MenuItem, label: &'static str, hover: f32) -> Element<'static, Message> {
    let is_active = item.is_active;
    let is_discover = item.entry == MenuEntry::Discover;

    let label = text(label)
        .size(if is_discover { 18 } else { 14 })
        .font(iced::Font {
            weight: if is_discover { BOLD_WEIGHT } else { MEDIUM_WEIGHT },
            ..Default::default()
        });

    let content: Element<'static, Message> = match item.icon() {
        Some(icon) => row![
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(20)
                .height(20)
                .style(move |theme, _status| svg::Style {
                    color: Some(theme::item_text(theme, is_active, hover)),
                }),
            Space::new().width(12),
            label,
        ]
        .align_y(Alignment::Center)
        .into(),
        None => label.into(),
    };

    let classes = item.classes();
    mouse_area(
        container(content)
            .width(Fill)
            .padding(Padding::new(10.0).left(12.0).right(12.0))
            .style(move |theme| theme::classed(theme, &classes, hover)),
    )
    .on_enter(Message::Hover(HoverTarget::Menu(item.entry)))
    .on_exit(Message::Unhover(HoverTarget::Menu(item.entry)))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_only_active_entry() {
        let model = model();
        let active: Vec<_> = model.items().filter(|item| item.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].entry, MenuEntry::Home);
        assert!(active[0].classes().contains(class::ACTIVE));
    }

    #[test]
    fn sections_have_fixed_membership() {
        let model = model();
        let primary: Vec<_> = model.primary.iter().map(|item| item.entry).collect();
        let library: Vec<_> = model.library.iter().map(|item| item.entry).collect();
        assert_eq!(
            primary,
            [
                MenuEntry::Discover,
                MenuEntry::Home,
                MenuEntry::Browse,
                MenuEntry::Radio
            ]
        );
        assert_eq!(
            library,
            [
                MenuEntry::Playlists,
                MenuEntry::Songs,
                MenuEntry::PersonalizedPicks
            ]
        );
        assert_eq!(model.items().count(), 7);
    }

    #[test]
    fn only_discover_lacks_an_icon() {
        let model = model();
        for item in model.items() {
            let is_discover = item.entry == MenuEntry::Discover;
            assert_eq!(item.has_icon, !is_discover);
            assert_eq!(item.icon().is_some(), !is_discover);
            assert_eq!(item.classes().contains(class::DISCOVER), is_discover);
        }
        assert!(model.library.iter().all(|item| item.has_icon));
    }

    #[test]
    fn every_item_is_a_menu_item() {
        let model = model();
        assert_eq!(model.classes().to_string(), "sidebar");
        for item in model.items() {
            assert_eq!(item.classes().base(), class::MENU_ITEM);
        }
    }

    #[test]
    fn model_is_stable_across_calls() {
        assert_eq!(model(), model());
    }
}
