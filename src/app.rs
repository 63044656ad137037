//! Preview application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};
use ripple::features::Settings;

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let path = Settings::file_path();

        let app = Self::from_settings(settings, path.clone()).unwrap_or_else(|e| {
            tracing::warn!("{:#}, starting with defaults", e);
            Self::with_defaults(path)
        });
        tracing::info!(
            "Previewing {} ripple: {} circles every {:?}",
            app.animator.config().style,
            app.animator.config().ripple_count,
            app.animator.config().tick_interval
        );

        (app, Task::none())
    }

    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        format!("Ripple - {}", self.animator.config().style)
    }

    /// Ripple timer and reveal frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        self.animator.subscription().map(Message::Ripple)
    }
}
