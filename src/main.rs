//! Customizable seek bar - a touch-driven slider widget with a demo screen
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(520.0, 360.0))
        .antialiasing(true)
        .run()
}
