//! Application view rendering

use iced::widget::{Space, button, column, container, row, slider, text};
use iced::{Alignment, Element, Fill};
use ripple::RippleView;
use ripple::ui::theme;

use super::App;
use super::message::Message;

/// Size of the preview box
const PREVIEW_SIZE: f32 = 250.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let config = self.animator.config();
        let current_theme = self.theme();

        let preview: Element<'_, Message> = if self.mounted {
            RippleView::new(&self.animator)
                .tint(theme::contrasting_tint(&current_theme, config.tint))
                .into()
        } else {
            Space::new().width(Fill).height(Fill).into()
        };

        let preview_box = container(preview)
            .width(PREVIEW_SIZE)
            .height(PREVIEW_SIZE)
            .style(theme::preview_frame);

        let status = text(format!(
            "{} · step {} · {}",
            if self.animator.is_running() {
                "running"
            } else {
                "idle"
            },
            self.animator.current_step(),
            if self.mounted { "mounted" } else { "removed" },
        ))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        let toggles = row![
            control_button(
                if self.animate.get() { "Stop" } else { "Animate" },
                Message::ToggleAnimation
            ),
            control_button(&config.style.toggled().to_string(), Message::ToggleStyle),
            control_button(
                if self.mounted { "Remove" } else { "Insert" },
                Message::ToggleMounted
            ),
            control_button(
                if self.settings.display.dark_mode {
                    "Light"
                } else {
                    "Dark"
                },
                Message::ToggleDarkMode
            ),
        ]
        .spacing(8);

        let count = config.ripple_count.min(u8::MAX as usize) as u8;
        let count_slider = labeled(
            format!("Circles: {}", count),
            slider(1..=12u8, count, Message::RippleCountChanged),
        );

        let interval_ms = config.tick_interval.as_millis().min(u16::MAX as u128) as u16;
        let interval_slider = labeled(
            format!("Interval: {}ms", interval_ms),
            slider(50..=1000u16, interval_ms, Message::IntervalChanged).step(10u16),
        );

        let content = column![
            preview_box,
            Space::new().height(12),
            status,
            Space::new().height(12),
            toggles,
            count_slider,
            interval_slider,
        ]
        .spacing(8)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .style(theme::main_content)
            .into()
    }
}

fn control_button<'a>(label: &str, message: Message) -> Element<'a, Message> {
    button(text(label.to_string()).size(13))
        .padding([6, 14])
        .style(theme::secondary_button)
        .on_press(message)
        .into()
}

fn labeled<'a>(
    label: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        text(label).size(12).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        control.into(),
    ]
    .spacing(4)
    .width(PREVIEW_SIZE)
    .into()
}
