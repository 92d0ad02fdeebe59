//! Hover animations built on `iced_anim`
//!
//! Hover highlights are the only moving part of the mockup; they never
//! change what is rendered, only how strongly it is highlighted.

mod hover;

pub use hover::HoverAnimations;
