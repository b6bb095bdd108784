//! Message update handler

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SeekBar(event) => {
                if !self.seek_bar.on_touch(event) {
                    tracing::trace!(?event, "Seek bar ignored touch");
                }
            }
            Message::SeekToStart => self.seek_bar.set_progress(0),
            Message::SeekToEnd => {
                let max_progress = self.seek_bar.max_progress();
                self.seek_bar.set_progress(max_progress);
            }
        }

        Task::none()
    }
}
