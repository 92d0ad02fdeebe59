//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app::Message`; callers pass the messages
//! they want emitted.

pub mod album_card;
pub mod card_grid;
pub mod playlist_card;
pub mod section_header;
