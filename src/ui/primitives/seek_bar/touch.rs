//! Touch input model and the press state machine

use super::geometry::Bounds;

/// Extra margin around the thumb that still counts as a hit
pub const THUMB_TOUCH_SLOP: i32 = 40;

/// Kind of a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A touch event in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchAction::Cancel, x, y)
    }
}

/// Whether a gesture currently holds the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    #[default]
    Idle,
    Pressed,
}

impl TouchState {
    /// Run the hit-test gate for an incoming event
    ///
    /// Returns the state to continue with, or `None` when the event must be
    /// rejected. With `thumb_only` set, an idle widget accepts only events that
    /// land within [`THUMB_TOUCH_SLOP`] of `thumb`, and accepting one presses it.
    pub fn gate(self, thumb_only: bool, thumb: Bounds, event: &TouchEvent) -> Option<TouchState> {
        let near_thumb = || thumb.contains_with_margin(event.x, event.y, THUMB_TOUCH_SLOP);

        match (thumb_only, self) {
            (false, state) => Some(state),
            (true, TouchState::Pressed) => Some(TouchState::Pressed),
            (true, TouchState::Idle) if near_thumb() => Some(TouchState::Pressed),
            (true, TouchState::Idle) => None,
        }
    }
}
