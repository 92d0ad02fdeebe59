//! Section header widget
//!
//! Section title with a muted subheading below it.

use iced::widget::{Space, column, text};
use iced::Element;

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
pub fn view<'a, Message: 'a>(title: &'a str, subheading: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(24).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().height(4),
        text(subheading).size(14).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .into()
}
