//! Main content area
//! Two sections: featured playlists in a large grid, albums in a small grid.
//!
//! Every card carries its entry id as repetition key so reordering the
//! literals never mixes up card attributes.

use iced::widget::{Space, column, container, scrollable};
use iced::{Element, Fill, Padding};

use crate::app::{HoverTarget, Message};
use crate::catalog::{self, Album, Keyed, Playlist};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::{self, ClassList, class};
use crate::ui::widgets::card_grid::{self, GridMetrics};
use crate::ui::widgets::{album_card, playlist_card, section_header};

/// Horizontal padding around the content column
pub const CONTENT_PADDING: f32 = 32.0;

/// Grid flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    Large,
    Small,
}

impl GridKind {
    pub fn class(&self) -> &'static str {
        match self {
            GridKind::Large => class::LARGE_GRID,
            GridKind::Small => class::SMALL_GRID,
        }
    }

    pub fn metrics(&self) -> GridMetrics {
        match self {
            GridKind::Large => GridMetrics {
                card_width: playlist_card::COVER_SIZE,
                spacing: 24.0,
                row_spacing: 32.0,
            },
            GridKind::Small => GridMetrics {
                card_width: album_card::COVER_SIZE,
                spacing: 20.0,
                row_spacing: 24.0,
            },
        }
    }
}

/// One repeated entry and its repetition key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<T> {
    pub key: u32,
    pub item: T,
}

/// A titled grid of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub title: Key,
    pub subheading: Key,
    pub grid: GridKind,
    pub card_class: &'static str,
    pub cards: Vec<Card<T>>,
}

impl<T: Keyed> Section<T> {
    fn new(grid: GridKind, card_class: &'static str, items: Vec<T>) -> Self {
        Self {
            title: Key::SectionTitle,
            subheading: Key::SectionSubheading,
            grid,
            card_class,
            cards: items
                .into_iter()
                .map(|item| Card {
                    key: item.key(),
                    item,
                })
                .collect(),
        }
    }
}

impl<T> Section<T> {
    pub fn classes(&self) -> ClassList {
        ClassList::new(class::CONTENT_SECTION)
    }

    pub fn grid_classes(&self) -> ClassList {
        ClassList::new(self.grid.class())
    }

    pub fn card_classes(&self) -> ClassList {
        ClassList::new(self.card_class)
    }
}

/// Structure of the content area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainContentModel {
    pub playlists: Section<Playlist>,
    pub albums: Section<Album>,
}

impl MainContentModel {
    pub fn classes(&self) -> ClassList {
        ClassList::new(class::MAIN_CONTENT)
    }

    pub fn card_count(&self) -> usize {
        self.playlists.cards.len() + self.albums.cards.len()
    }
}

/// Build the content structure from the literal catalog
pub fn model() -> MainContentModel {
    MainContentModel {
        playlists: Section::new(GridKind::Large, class::PLAYLIST_CARD, catalog::playlists()),
        albums: Section::new(GridKind::Small, class::ALBUM_CARD, catalog::albums()),
    }
}

/// Render the content area
///
/// `width` is the width available to the content region, used to pick the
/// number of grid columns.
pub fn view(
    model: &MainContentModel,
    locale: Locale,
    animations: &HoverAnimations<HoverTarget>,
    width: f32,
) -> Element<'static, Message> {
    let inner_width = width - CONTENT_PADDING * 2.0;

    let playlist_cards = model
        .playlists
        .cards
        .iter()
        .map(|card| {
            let target = HoverTarget::Playlist(card.key);
            let playlist = &card.item;
            playlist_card::view(
                playlist.title,
                playlist.description,
                playlist.accent.to_color(),
                animations.progress(&target),
                Message::Hover(target),
                Message::Unhover(target),
            )
        })
        .collect();

    let album_cards = model
        .albums
        .cards
        .iter()
        .map(|card| {
            let target = HoverTarget::Album(card.key);
            let album = &card.item;
            album_card::view(
                album.artist,
                album.genre,
                album.accent.to_color(),
                animations.progress(&target),
                Message::Hover(target),
                Message::Unhover(target),
            )
        })
        .collect();

    let content = column![
        section(&model.playlists, locale, playlist_cards, inner_width),
        section(&model.albums, locale, album_cards, inner_width),
        Space::new().height(16),
    ]
    .spacing(40)
    .padding(Padding::new(CONTENT_PADDING).top(8.0));

    let classes = model.classes();
    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .style(theme::content_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(move |theme| theme::classed(theme, &classes, 0.0))
    .into()
}

fn section<T>(
    section: &Section<T>,
    locale: Locale,
    cards: Vec<Element<'static, Message>>,
    width: f32,
) -> Element<'static, Message> {
    let classes = section.classes();
    let grid_classes = section.grid_classes();

    let cards: Vec<Element<'static, Message>> = cards
        .into_iter()
        .map(|card| {
            let card_classes = section.card_classes();
            container(card)
                .style(move |theme| theme::classed(theme, &card_classes, 0.0))
                .into()
        })
        .collect();

    let grid = container(card_grid::view(cards, section.grid.metrics(), width))
        .width(Fill)
        .style(move |theme| theme::classed(theme, &grid_classes, 0.0));

    container(column![
        section_header::view(locale.get(section.title), locale.get(section.subheading)),
        Space::new().height(20),
        grid,
    ])
    .width(Fill)
    .style(move |theme| theme::classed(theme, &classes, 0.0))
    .into()
}
