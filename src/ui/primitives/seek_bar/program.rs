//! Canvas program that hosts a [`SeekBar`]
//!
//! Pointer input is turned into [`TouchEvent`]s in widget-local coordinates.
//! A press is only taken when the seek bar would accept it; after that every
//! move and the final release of the same pointer go to the seek bar until the
//! gesture ends, even when the pointer leaves the canvas. Other fingers are
//! ignored while a gesture is in progress.

use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, Canvas, Event};
use iced::{Element, Length, Point, Rectangle, Renderer, Theme};

use super::SeekBar;
use super::touch::{TouchAction, TouchEvent};

/// Build the seek bar element
///
/// `on_touch` wraps each event for the application, which should hand it to
/// [`SeekBar::on_touch`].
pub fn view<'a, Message: 'a>(
    seek_bar: &'a SeekBar,
    height: impl Into<Length>,
    on_touch: impl Fn(TouchEvent) -> Message + 'a,
) -> Element<'a, Message> {
    Canvas::new(SeekBarProgram {
        seek_bar,
        on_touch: Box::new(on_touch),
    })
    .width(Length::Fill)
    .height(height)
    .into()
}

struct SeekBarProgram<'a, Message> {
    seek_bar: &'a SeekBar,
    on_touch: Box<dyn Fn(TouchEvent) -> Message + 'a>,
}

/// Pointer that owns the current gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// Per-canvas gesture tracking
#[derive(Debug, Clone, Copy, Default)]
struct Gesture {
    pointer: Option<Pointer>,
    /// Last forwarded position, for releases that carry none
    last: Point,
}

impl Gesture {
    fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    fn owned_by(&self, pointer: Pointer) -> bool {
        self.pointer == Some(pointer)
    }
}

impl<Message> canvas::Program<Message> for SeekBarProgram<'_, Message> {
    type State = Gesture;

    fn update(
        &self,
        gesture: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

        let (pointer, touch_event) = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if !gesture.is_tracking() =>
            {
                (Pointer::Mouse, at(TouchEvent::down, cursor.position_in(bounds)?))
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
                if gesture.owned_by(Pointer::Mouse) =>
            {
                (Pointer::Mouse, at(TouchEvent::moved, local(*position)))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if gesture.owned_by(Pointer::Mouse) =>
            {
                let position = cursor.land().position().map(local).unwrap_or(gesture.last);
                (Pointer::Mouse, at(TouchEvent::up, position))
            }
            Event::Touch(touch::Event::FingerPressed { id, position })
                if !gesture.is_tracking() && bounds.contains(*position) =>
            {
                (Pointer::Finger(*id), at(TouchEvent::down, local(*position)))
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if gesture.owned_by(Pointer::Finger(*id)) =>
            {
                (Pointer::Finger(*id), at(TouchEvent::moved, local(*position)))
            }
            Event::Touch(touch::Event::FingerLifted { id, position })
                if gesture.owned_by(Pointer::Finger(*id)) =>
            {
                (Pointer::Finger(*id), at(TouchEvent::up, local(*position)))
            }
            Event::Touch(touch::Event::FingerLost { id, position })
                if gesture.owned_by(Pointer::Finger(*id)) =>
            {
                (Pointer::Finger(*id), at(TouchEvent::cancel, local(*position)))
            }
            _ => return None,
        };

        match touch_event.action {
            TouchAction::Down => {
                if !self.seek_bar.accepts(&touch_event) {
                    tracing::trace!(?touch_event, "Press away from the thumb, passing through");
                    return None;
                }
                gesture.pointer = Some(pointer);
            }
            TouchAction::Move => {}
            TouchAction::Up | TouchAction::Cancel => gesture.pointer = None,
        }
        gesture.last = Point::new(touch_event.x, touch_event.y);

        Some(canvas::Action::publish((self.on_touch)(touch_event)).and_capture())
    }

    fn draw(
        &self,
        _gesture: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        vec![self.seek_bar.draw(renderer, bounds)]
    }

    fn mouse_interaction(
        &self,
        gesture: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if gesture.is_tracking() {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn at(make: fn(f32, f32) -> TouchEvent, position: Point) -> TouchEvent {
    make(position.x, position.y)
}
