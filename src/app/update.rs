//! Message update handlers

use std::time::Duration;

use iced::Task;
use ripple::RippleConfig;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Ripple(event) => {
                self.animator.update(event);
            }
            Message::ToggleAnimation => {
                let enabled = self.animate.toggle();
                self.animator.sync();
                self.settings.ripple.animate = enabled;
                tracing::info!("Ripple animation {}", if enabled { "on" } else { "off" });
                self.save_settings();
            }
            Message::ToggleStyle => {
                let style = self.animator.config().style.toggled();
                self.reconfigure(self.animator.config().clone().style(style));
            }
            Message::RippleCountChanged(count) => {
                if count as usize != self.animator.config().ripple_count {
                    self.reconfigure(self.animator.config().clone().ripple_count(count as usize));
                }
            }
            Message::IntervalChanged(ms) => {
                let interval = Duration::from_millis(ms as u64);
                if interval != self.animator.config().tick_interval {
                    self.reconfigure(self.animator.config().clone().tick_interval(interval));
                }
            }
            Message::ToggleMounted => {
                if self.mounted {
                    self.animator.unmount();
                } else {
                    self.animator.mount();
                }
                self.mounted = !self.mounted;
            }
            Message::ToggleDarkMode => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                self.save_settings();
            }
        }

        Task::none()
    }

    fn reconfigure(&mut self, config: RippleConfig) {
        match self.animator.reconfigure(config) {
            Ok(()) => {
                self.settings.ripple.apply(self.animator.config());
                self.save_settings();
            }
            Err(e) => tracing::warn!("Rejected ripple config: {}", e),
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings.save_to_file(path) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }
}
