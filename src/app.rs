//! Main application module

mod message;
mod view;

use std::time::Instant;

use iced::{Subscription, Task, Theme};

use crate::catalog;
use crate::i18n::{Key, Language, Locale};
use crate::settings::Settings;
use crate::ui::animation::HoverAnimations;

pub use message::{HoverTarget, Message};
pub use view::{ShellModel, shell};

/// Application state
///
/// The page structure is built once and never changes; the only moving
/// parts are hover highlights and the window width used for grid columns.
pub struct App {
    settings: Settings,
    locale: Locale,
    shell: ShellModel,
    hover: HoverAnimations<HoverTarget>,
    window_width: f32,
}

impl App {
    /// Create new application instance and open the main window
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_settings(Settings::load());

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(app.settings.window.width, app.settings.window.height),
            min_size: Some(iced::Size::new(720.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "music-app".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Build the application state from already loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));

        if let Err(e) = catalog::validate() {
            tracing::error!("Demo catalog is malformed: {}", e);
        }

        let shell = shell();
        tracing::info!(
            "Page built: {} menu entries, {} tabs, {} cards",
            shell.sidebar.items().count(),
            shell.navigation.tabs.len(),
            shell.content.card_count()
        );

        let hover = HoverAnimations::new(settings.display.animations);
        let window_width = settings.window.width;

        Self {
            settings,
            locale,
            shell,
            hover,
            window_width,
        }
    }

    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Hover(target) => {
                tracing::debug!("Hover entered {:?}", target);
                self.hover.set_hovered(Some(target));
            }
            Message::Unhover(target) => {
                tracing::debug!("Hover left {:?}", target);
                if self.hover.hovered() == Some(&target) {
                    self.hover.set_hovered(None);
                }
            }
            Message::AnimationTick => {
                self.hover.tick(Instant::now());
            }
            Message::WindowResized(size) => {
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.window_width = size.width;
            }
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                return iced::exit();
            }
            Message::CallToAction => {
                tracing::debug!("Call to action pressed");
            }
        }

        Task::none()
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for hover animation frames and window events
    pub fn subscription(&self) -> Subscription<Message> {
        let animation_sub = if self.hover.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        Subscription::batch([animation_sub, resize_sub, close_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::MenuEntry;

    fn app() -> App {
        let mut settings = Settings::default();
        settings.display.animations = false;
        App::with_settings(settings)
    }

    #[test]
    fn hover_messages_move_the_highlight() {
        let mut app = app();
        let _ = app.update(Message::Hover(HoverTarget::Playlist(2)));
        assert_eq!(app.hover.progress(&HoverTarget::Playlist(2)), 1.0);

        let _ = app.update(Message::Unhover(HoverTarget::Playlist(2)));
        let _ = app.update(Message::Hover(HoverTarget::Album(5)));
        assert_eq!(app.hover.progress(&HoverTarget::Playlist(2)), 0.0);
        assert_eq!(app.hover.progress(&HoverTarget::Album(5)), 1.0);

        let _ = app.update(Message::Unhover(HoverTarget::Album(5)));
        assert_eq!(app.hover.hovered(), None);
    }

    #[test]
    fn late_exit_of_previous_node_keeps_new_highlight() {
        let mut app = app();
        let home = HoverTarget::Menu(MenuEntry::Home);
        let discover = HoverTarget::Menu(MenuEntry::Discover);

        // Moving up: the earlier node's enter is delivered before the later
        // node's exit.
        let _ = app.update(Message::Hover(home));
        let _ = app.update(Message::Hover(discover));
        let _ = app.update(Message::Unhover(home));
        assert_eq!(app.hover.hovered(), Some(&discover));
        assert_eq!(app.hover.progress(&discover), 1.0);
        assert_eq!(app.hover.progress(&home), 0.0);

        let segment_one = HoverTarget::Segment(1);
        let segment_zero = HoverTarget::Segment(0);
        let _ = app.update(Message::Hover(segment_one));
        let _ = app.update(Message::Hover(segment_zero));
        let _ = app.update(Message::Unhover(segment_one));
        assert_eq!(app.hover.hovered(), Some(&segment_zero));
    }

    #[test]
    fn exit_of_an_unrelated_node_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Hover(HoverTarget::Album(4)));
        let _ = app.update(Message::Unhover(HoverTarget::Playlist(1)));
        assert_eq!(app.hover.hovered(), Some(&HoverTarget::Album(4)));
    }

    #[test]
    fn resize_tracks_window_width() {
        let mut app = app();
        assert_eq!(app.window_width, 1280.0);
        let _ = app.update(Message::WindowResized(iced::Size::new(900.0, 700.0)));
        assert_eq!(app.window_width, 900.0);
    }

    #[test]
    fn interaction_never_changes_the_page_structure() {
        let mut app = app();
        let before = app.shell.clone();
        let _ = app.update(Message::CallToAction);
        let _ = app.update(Message::Hover(HoverTarget::Segment(1)));
        let _ = app.update(Message::AnimationTick);
        assert_eq!(app.shell, before);
        assert_eq!(app.shell, shell());
    }

    #[test]
    fn locale_follows_settings() {
        let mut settings = Settings::default();
        settings.display.language = "zh".to_string();
        let app = App::with_settings(settings);
        assert_eq!(app.locale.language, Language::Chinese);
    }
}
