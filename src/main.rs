//! Ripple preview - shows the ripple widget in a 250x250 box with controls
//! to switch it on and off, change its style and count, and remove it.

mod app;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(420.0, 560.0))
        .antialiasing(true)
        .run()?;

    Ok(())
}
