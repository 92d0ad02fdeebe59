//! Responsive card grid
//!
//! Cards are laid out row by row in the order given; the column count
//! follows the available width.

use iced::widget::{Space, column, row};
use iced::{Element, Fill};

/// Grid metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub card_width: f32,
    pub spacing: f32,
    pub row_spacing: f32,
}

impl GridMetrics {
    /// Number of columns that fit in `available` pixels, at least one
    pub fn columns(&self, available: f32) -> usize {
        if !available.is_finite() || available <= 0.0 {
            return 1;
        }
        let columns = ((available + self.spacing) / (self.card_width + self.spacing)).floor();
        (columns as usize).max(1)
    }
}

/// Lay out `cards` in rows of `metrics.columns(available)`
pub fn view<'a, Message: 'a>(
    cards: Vec<Element<'a, Message>>,
    metrics: GridMetrics,
    available: f32,
) -> Element<'a, Message> {
    let columns = metrics.columns(available);
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut current: Vec<Element<'a, Message>> = Vec::with_capacity(columns);

    for card in cards {
        current.push(card);
        if current.len() == columns {
            rows.push(row(std::mem::take(&mut current)).spacing(metrics.spacing).into());
        }
    }

    if !current.is_empty() {
        // Pad the last row so its cards keep the column width
        while current.len() < columns {
            current.push(Space::new().width(metrics.card_width).into());
        }
        rows.push(row(current).spacing(metrics.spacing).into());
    }

    column(rows).spacing(metrics.row_spacing).width(Fill).into()
}
