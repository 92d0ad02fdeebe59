//! UI Components module - page regions
//!
//! Each component exposes a pure `model()` describing its structure (class
//! lists, labels, keys, active flags) and a `view()` rendering that model.
//! Components are the only layer that imports from `crate::app`.

pub mod main_content;
pub mod navigation;
pub mod sidebar;

pub use main_content::MainContentModel;
pub use navigation::NavigationModel;
pub use sidebar::{MenuEntry, SidebarModel};
