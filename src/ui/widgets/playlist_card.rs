//! Playlist card widget
//!
//! Colored cover with the title overlaid, followed by title and
//! description. Hover lifts the cover; there is no click behavior.

use iced::widget::{Space, column, container, mouse_area, text};
use iced::{Alignment, Color, Element, Padding};

use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Square cover edge for playlist cards
pub const COVER_SIZE: f32 = 200.0;
const COVER_RADIUS: f32 = 12.0;

/// Create a playlist card element
///
/// # Arguments
/// * `title` - Playlist title, shown on the cover and below it
/// * `description` - One-line description
/// * `fill` - Cover color
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `on_hover` - Message to send when the card is hovered
/// * `on_unhover` - Message to send when the pointer leaves the card
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    description: &'a str,
    fill: Color,
    hover_progress: f32,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let overlay = text(title)
        .size(20)
        .color(overlay_color(fill))
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let cover = container(overlay)
        .width(COVER_SIZE)
        .height(COVER_SIZE)
        .padding(Padding::new(16.0))
        .align_y(iced::alignment::Vertical::Bottom)
        .style(move |_theme| theme::cover(fill, COVER_RADIUS, hover_progress));

    let title_text = text(title).size(16).font(iced::Font {
        weight: MEDIUM_WEIGHT,
        ..Default::default()
    });

    let description_text = text(description).size(13).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    let content = column![
        cover,
        Space::new().height(12),
        title_text,
        Space::new().height(4),
        description_text,
    ]
    .width(COVER_SIZE)
    .align_x(Alignment::Start);

    mouse_area(content)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}

/// Readable overlay text for a cover color
fn overlay_color(fill: Color) -> Color {
    let luminance = 0.2126 * fill.r + 0.7152 * fill.g + 0.0722 * fill.b;
    if luminance > 0.5 {
        Color::from_rgba(0.0, 0.0, 0.0, 0.8)
    } else {
        Color::WHITE
    }
}
