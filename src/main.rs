//! Music app - a static music browsing mockup
//! Built with iced: sidebar, tab bar and a grid of playlist and album cards

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod catalog;
mod i18n;
mod settings;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();
    tracing::info!("Starting music app mockup");

    // Run as a daemon and exit explicitly when the main window closes
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
        .context("music app event loop failed")
}
