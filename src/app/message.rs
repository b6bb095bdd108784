//! Application messages

use crate::ui::primitives::seek_bar::TouchEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input routed to the seek bar
    SeekBar(TouchEvent),
    /// Move the seek bar back to the start
    SeekToStart,
    /// Jump the seek bar to the end of its range
    SeekToEnd,
}
