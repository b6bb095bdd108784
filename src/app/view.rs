//! Application view rendering

use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::indicator;
use crate::ui::primitives::seek_bar;
use crate::ui::theme;

/// Height of the seek bar canvas
const SEEK_BAR_HEIGHT: f32 = 80.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let indicator = *self.indicator.borrow();
        let position = self.seek_bar.position_for(indicator.progress);

        let label = text(indicator.label()).size(32);

        let track = stack![
            seek_bar::view(&self.seek_bar, SEEK_BAR_HEIGHT, Message::SeekBar),
            indicator::view(&indicator, position),
        ]
        .width(Fill);

        let controls = row![
            button(text("Start"))
                .style(theme::secondary_button)
                .padding([8, 20])
                .on_press(Message::SeekToStart),
            button(text("End"))
                .style(theme::secondary_button)
                .padding([8, 20])
                .on_press(Message::SeekToEnd),
        ]
        .spacing(12);

        container(
            column![label, track, controls]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Fill)
        .height(Fill)
        .center_y(Fill)
        .style(theme::main_content)
        .into()
    }
}
