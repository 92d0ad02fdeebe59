//! Album card widget
//!
//! Colored cover without overlay, followed by artist and genre.

use iced::widget::{Space, column, container, mouse_area, text};
use iced::{Alignment, Color, Element, Fill};

use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Square cover edge for album cards
pub const COVER_SIZE: f32 = 150.0;
const COVER_RADIUS: f32 = 8.0;

/// Create an album card element
pub fn view<'a, Message: Clone + 'a>(
    artist: &'a str,
    genre: &'a str,
    fill: Color,
    hover_progress: f32,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let cover = container(Space::new().width(Fill).height(Fill))
        .width(COVER_SIZE)
        .height(COVER_SIZE)
        .style(move |_theme| theme::cover(fill, COVER_RADIUS, hover_progress));

    let content = column![
        cover,
        Space::new().height(8),
        text(artist).size(14).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }),
        Space::new().height(2),
        text(genre).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .width(COVER_SIZE)
    .align_x(Alignment::Start);

    mouse_area(content)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}
