//! Top navigation bar
//! Segmented control with three tabs plus a call-to-action button.
//!
//! Tabs are visual only: they highlight on hover but cannot be selected.

use iced::widget::{Space, button, container, mouse_area, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{HoverTarget, Message};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::theme::{self, ClassList, MEDIUM_WEIGHT, class};

/// Number of segments in the control
pub const TAB_COUNT: usize = 3;

/// Fixed width of every segment
const SEGMENT_WIDTH: f32 = 112.0;

/// One segment of the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: Key,
    pub is_active: bool,
}

impl Tab {
    pub fn classes(&self) -> ClassList {
        ClassList::new(class::SEGMENT).with_if(self.is_active, class::ACTIVE)
    }
}

/// Structure of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    pub tabs: [Tab; TAB_COUNT],
    pub action: Key,
}

impl NavigationModel {
    pub fn classes(&self) -> ClassList {
        ClassList::new(class::NAVIGATION)
    }

    pub fn action_classes(&self) -> ClassList {
        ClassList::new(class::CTA_BUTTON)
    }
}

/// Build the navigation bar structure
pub fn model() -> NavigationModel {
    let tab = |is_active| Tab {
        label: Key::Tab,
        is_active,
    };

    NavigationModel {
        tabs: [tab(true), tab(false), tab(false)],
        action: Key::CallToAction,
    }
}

/// Render the navigation bar
pub fn view(
    model: &NavigationModel,
    locale: Locale,
    animations: &HoverAnimations<HoverTarget>,
) -> Element<'static, Message> {
    let segments = row(model.tabs.iter().enumerate().map(|(idx, tab)| {
        let hover = animations.progress(&HoverTarget::Segment(idx));
        segment(tab, locale.get(tab.label), idx, hover)
    }))
    .spacing(4);

    let segmented_control = container(segments)
        .padding(4)
        .style(theme::segmented_track);

    let action_classes = model.action_classes();
    let cta = button(
        text(locale.get(model.action))
            .size(14)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(Padding::new(10.0).left(18.0).right(18.0))
    .style(move |theme, status| theme::classed_button(theme, &action_classes, status))
    .on_press(Message::CallToAction);

    let bar = row![segmented_control, Space::new().width(Fill), cta]
        .align_y(Alignment::Center)
        .padding(Padding::new(16.0).left(24.0).right(24.0));

    let classes = model.classes();
    container(bar)
        .width(Fill)
        .style(move |theme| theme::classed(theme, &classes, 0.0))
        .into()
}

/// A single segment; hover only changes its highlight
fn segment(tab: &Tab, label: &'static str, idx: usize, hover: f32) -> Element<'static, Message> {
    let classes = tab.classes();

    mouse_area(
        container(text(label).size(14))
            .center_x(SEGMENT_WIDTH)
            .padding(Padding::new(6.0))
            .style(move |theme| theme::classed(theme, &classes, hover)),
    )
    .on_enter(Message::Hover(HoverTarget::Segment(idx)))
    .on_exit(Message::Unhover(HoverTarget::Segment(idx)))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_is_the_only_active_one() {
        let model = model();
        let active: Vec<_> = model
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.is_active)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(active, vec![0usize]);
        assert_eq!(model.tabs[0].classes().to_string(), "segment active");
        assert_eq!(model.tabs[2].classes().to_string(), "segment");
    }

    #[test]
    fn tabs_are_equally_weighted() {
        let model = model();
        assert!(model.tabs.iter().all(|tab| tab.label == Key::Tab));
    }

    #[test]
    fn single_call_to_action() {
        let model = model();
        assert_eq!(model.action, Key::CallToAction);
        assert_eq!(model.action_classes().base(), class::CTA_BUTTON);
        assert_eq!(model.classes().base(), class::NAVIGATION);
    }

    #[test]
    fn model_is_stable_across_calls() {
        assert_eq!(model(), model());
    }
}
