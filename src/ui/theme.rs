//! Theme system for the mockup
//!
//! Layout code tags every region with a [`ClassList`] using the class names
//! below. This module is the only place those names turn into colors,
//! borders and radii, so structure and style stay decoupled.

use std::fmt;

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Style classes
// ============================================================================

/// Style class names shared by layout and theme
pub mod class {
    pub const SIDEBAR: &str = "sidebar";
    pub const MENU_ITEM: &str = "menu-item";
    pub const DISCOVER: &str = "discover";
    pub const ACTIVE: &str = "active";
    pub const NAVIGATION: &str = "navigation";
    pub const SEGMENT: &str = "segment";
    pub const CTA_BUTTON: &str = "cta-button";
    pub const MAIN_CONTENT: &str = "main-content";
    pub const CONTENT_SECTION: &str = "content-section";
    pub const LARGE_GRID: &str = "large-grid";
    pub const SMALL_GRID: &str = "small-grid";
    pub const PLAYLIST_CARD: &str = "playlist-card";
    pub const ALBUM_CARD: &str = "album-card";
}

/// Ordered set of style classes attached to a view node
///
/// The first class is the base class that selects the style; the rest are
/// modifiers such as `active`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    pub fn new(base: &'static str) -> Self {
        Self(vec![base])
    }

    /// Append a modifier class
    pub fn with(mut self, name: &'static str) -> Self {
        if !self.0.contains(&name) {
            self.0.push(name);
        }
        self
    }

    /// Append a modifier class when `cond` holds
    pub fn with_if(self, cond: bool, name: &'static str) -> Self {
        if cond { self.with(name) } else { self }
    }

    pub fn base(&self) -> &'static str {
        self.0[0]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| *c == name)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

// ============================================================================
// Font weights
// ============================================================================

/// Bold font weight (SF Pro looks better with Semibold)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x111111);
    pub const SIDEBAR: Color = color!(0x1a1a1a);
    pub const SURFACE: Color = color!(0x222222);
    pub const BORDER: Color = color!(0x2e2e2e);
    pub const TEXT_MUTED: Color = color!(0x8a8a8a);
    pub const TEXT_PRIMARY: Color = color!(0xf5f5f5);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SIDEBAR: Color = color!(0xfafafa);
    pub const SURFACE: Color = color!(0xf0f0f0);
    pub const BORDER: Color = color!(0xe5e5e5);
    pub const TEXT_MUTED: Color = color!(0x757575);
    pub const TEXT_PRIMARY: Color = color!(0x1e1e1e);
}

/// Highlight color for the active menu item, active segment and CTA
pub const ACCENT: Color = color!(0x2c2c2c);

/// Hover state for the accent
pub const ACCENT_HOVER: Color = color!(0x444444);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn sidebar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SIDEBAR
    } else {
        light::SIDEBAR
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Text color on top of an active (accent) background
pub fn text_on_accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Accent as drawn in the current palette
pub fn accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        ACCENT
    }
}

/// Hover background with custom alpha, for animated highlights
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    let base = text_primary(theme);
    Color::from_rgba(base.r, base.g, base.b, alpha)
}

/// Interpolate between muted and primary text by hover progress
pub fn animated_text(theme: &Theme, progress: f32) -> Color {
    let from = text_muted(theme);
    let to = text_primary(theme);
    let t = progress.clamp(0.0, 1.0);
    Color::from_rgb(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
    )
}

/// Foreground color of a menu item or segment
pub fn item_text(theme: &Theme, active: bool, hover: f32) -> Color {
    if active {
        text_on_accent(theme)
    } else {
        animated_text(theme, hover)
    }
}

// ============================================================================
// Class-driven container styles
// ============================================================================

/// Resolve a class list to a container style
///
/// `hover` is the hover animation progress (0.0 to 1.0) of the node, if it
/// reacts to hover at all.
pub fn classed(theme: &Theme, classes: &ClassList, hover: f32) -> container::Style {
    let active = classes.contains(class::ACTIVE);

    match classes.base() {
        class::SIDEBAR => container::Style {
            background: Some(Background::Color(sidebar_bg(theme))),
            text_color: Some(text_primary(theme)),
            border: Border {
                width: 1.0,
                color: border_color(theme),
                ..Default::default()
            },
            ..Default::default()
        },
        class::MENU_ITEM => {
            let fill = if active {
                accent(theme)
            } else {
                hover_bg_alpha(theme, 0.06 * hover)
            };
            container::Style {
                background: Some(Background::Color(fill)),
                text_color: Some(item_text(theme, active, hover)),
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
        class::NAVIGATION => container::Style {
            background: Some(Background::Color(background(theme))),
            text_color: Some(text_primary(theme)),
            ..Default::default()
        },
        class::SEGMENT => {
            let fill = if active {
                background(theme)
            } else {
                hover_bg_alpha(theme, 0.04 * hover)
            };
            container::Style {
                background: Some(Background::Color(fill)),
                text_color: Some(if active {
                    text_primary(theme)
                } else {
                    animated_text(theme, hover)
                }),
                border: Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                shadow: if active {
                    Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        offset: Vector::new(0.0, 1.0),
                        blur_radius: 3.0,
                    }
                } else {
                    Shadow::default()
                },
                ..Default::default()
            }
        }
        class::MAIN_CONTENT => container::Style {
            background: Some(Background::Color(background(theme))),
            text_color: Some(text_primary(theme)),
            ..Default::default()
        },
        class::PLAYLIST_CARD | class::ALBUM_CARD => container::Style {
            text_color: Some(text_primary(theme)),
            ..Default::default()
        },
        _ => container::Style::default(),
    }
}

/// Track behind the segmented control
pub fn segmented_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Colored card cover with hover lift
pub fn cover(fill: Color, radius: f32, hover: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: radius.into(),
            width: 1.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08 + 0.12 * hover),
            offset: Vector::new(0.0, 2.0 + 4.0 * hover),
            blur_radius: 6.0 + 10.0 * hover,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Resolve a class list to a button style
pub fn classed_button(theme: &Theme, classes: &ClassList, status: button::Status) -> button::Style {
    match classes.base() {
        class::CTA_BUTTON => cta_button(theme, status),
        _ => button::Style {
            text_color: text_primary(theme),
            ..Default::default()
        },
    }
}

/// Call-to-action button
pub fn cta_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(accent(theme))),
        text_color: text_on_accent(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed if !is_dark(theme) => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(text_muted(theme))),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the content area
pub fn content_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_keeps_order_and_skips_duplicates() {
        let classes = ClassList::new(class::MENU_ITEM)
            .with(class::ACTIVE)
            .with(class::ACTIVE)
            .with_if(false, class::DISCOVER);
        assert_eq!(classes.base(), class::MENU_ITEM);
        assert!(classes.contains(class::ACTIVE));
        assert!(!classes.contains(class::DISCOVER));
        assert_eq!(classes.to_string(), "menu-item active");
    }

    #[test]
    fn active_menu_item_uses_accent() {
        let classes = ClassList::new(class::MENU_ITEM).with(class::ACTIVE);
        let style = classed(&Theme::Light, &classes, 0.0);
        assert_eq!(style.background, Some(Background::Color(ACCENT)));
        assert_eq!(style.text_color, Some(light::BACKGROUND));
    }

    #[test]
    fn idle_menu_item_is_transparent() {
        let classes = ClassList::new(class::MENU_ITEM);
        let style = classed(&Theme::Light, &classes, 0.0);
        let Some(Background::Color(bg)) = style.background else {
            panic!("menu item should have a solid background");
        };
        assert_eq!(bg.a, 0.0);
    }

    #[test]
    fn palette_follows_theme() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(sidebar_bg(&Theme::Light), light::SIDEBAR);
    }

    #[test]
    fn animated_text_interpolates_endpoints() {
        let theme = Theme::Light;
        let close = |a: Color, b: Color| {
            (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
        };
        assert!(close(animated_text(&theme, 0.0), text_muted(&theme)));
        assert!(close(animated_text(&theme, 1.0), text_primary(&theme)));
        assert!(close(animated_text(&theme, 5.0), text_primary(&theme)));
    }
}
