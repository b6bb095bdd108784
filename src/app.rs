//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use iced::{Task, Theme};

use crate::features::Attributes;
use crate::ui::components::Indicator;
use crate::ui::primitives::{SeekBar, SeekBarConfig};
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let attributes = Attributes::load();
        let config = SeekBarConfig::from_attributes(&attributes);
        tracing::info!(
            max_progress = config.max_progress,
            thumb_only = config.enable_click_on_thumb_only,
            "Starting seek bar demo"
        );

        (Self::with_seek_bar(SeekBar::new(config)), Task::none())
    }

    /// Wire the indicator to `seek_bar`
    pub fn with_seek_bar(mut seek_bar: SeekBar) -> Self {
        let indicator = Rc::new(RefCell::new(Indicator::default()));
        seek_bar.add_update_listener(Indicator::listener(&indicator));

        Self {
            seek_bar,
            indicator,
        }
    }

    pub fn title(&self) -> String {
        "Customizable Seek Bar".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
