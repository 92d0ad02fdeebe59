//! Application view rendering

use iced::widget::{column, row};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{
    MainContentModel, NavigationModel, SidebarModel, main_content, navigation, sidebar,
};

/// Structure of the whole page: sidebar on the left, navigation above
/// content on the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellModel {
    pub sidebar: SidebarModel,
    pub navigation: NavigationModel,
    pub content: MainContentModel,
}

/// Compose the page structure
pub fn shell() -> ShellModel {
    ShellModel {
        sidebar: sidebar::model(),
        navigation: navigation::model(),
        content: main_content::model(),
    }
}

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let sidebar_width = self.settings.window.clamped_sidebar_width();
        let content_width = (self.window_width - sidebar_width).max(0.0);

        let main_area = column![
            navigation::view(&self.shell.navigation, self.locale, &self.hover),
            main_content::view(&self.shell.content, self.locale, &self.hover, content_width),
        ]
        .width(Fill)
        .height(Fill);

        row![
            sidebar::view(&self.shell.sidebar, self.locale, &self.hover, sidebar_width),
            main_area,
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::class;

    #[test]
    fn shell_is_idempotent() {
        assert_eq!(shell(), shell());
    }

    #[test]
    fn shell_has_expected_regions() {
        let shell = shell();

        assert_eq!(shell.sidebar.classes().base(), class::SIDEBAR);
        assert_eq!(shell.sidebar.primary.len(), 4);
        assert_eq!(shell.sidebar.library.len(), 3);
        assert_eq!(shell.sidebar.items().count(), 7);

        assert_eq!(shell.navigation.classes().base(), class::NAVIGATION);
        assert_eq!(shell.navigation.tabs.len(), 3);
        assert_eq!(shell.navigation.action_classes().base(), class::CTA_BUTTON);

        assert_eq!(shell.content.classes().base(), class::MAIN_CONTENT);
        assert_eq!(
            shell.content.playlists.classes(),
            shell.content.albums.classes()
        );
        assert_eq!(shell.content.playlists.classes().base(), class::CONTENT_SECTION);
        assert_eq!(shell.content.playlists.cards.len(), 4);
        assert_eq!(shell.content.albums.cards.len(), 6);
        assert_eq!(shell.content.card_count(), 10);
    }

    #[test]
    fn exactly_one_active_flag_per_set() {
        let shell = shell();
        assert_eq!(shell.sidebar.items().filter(|item| item.is_active).count(), 1);
        assert_eq!(shell.navigation.tabs.iter().filter(|tab| tab.is_active).count(), 1);
    }
}
