//! UI module for the music app mockup
//!
//! # Architecture
//!
//! The UI is organized into two layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Page regions, each exposing a pure
//!   `model()` and a `view()` that renders it
//!
//! `theme` maps style class lists to iced styles and `animation` holds
//! hover fade state.

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
