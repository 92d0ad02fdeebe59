//! Application messages

use crate::ui::components::MenuEntry;

/// Anything that shows a hover highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    Menu(MenuEntry),
    Segment(usize),
    Playlist(u32),
    Album(u32),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered a highlighted node
    Hover(HoverTarget),
    /// Pointer left a highlighted node
    ///
    /// Enter and exit events arrive in widget order, so the exit of the
    /// previous node can follow the enter of the next one. Only the
    /// target it names is cleared.
    Unhover(HoverTarget),
    /// Frame tick while hover fades are running
    AnimationTick,
    /// Main window resized; drives grid column count
    WindowResized(iced::Size),
    /// Main window closed
    WindowClosed,
    /// The call-to-action button was pressed; it has no behavior
    CallToAction,
}
