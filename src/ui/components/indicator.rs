//! Floating indicator that follows the seek bar thumb
//!
//! Its state is updated from the seek bar's observer callbacks, so it is
//! shared with them through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use iced::widget::{Space, container};
use iced::{Background, Border, Element, Padding, Shadow, Vector};

use crate::ui::primitives::UpdateListener;
use crate::ui::theme;

/// Side of the indicator square
pub const INDICATOR_SIZE: f32 = 50.0;

/// What the seek bar last reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicator {
    pub progress: i32,
    /// Vertical thumb center at the time of the report
    pub center_y: i32,
    /// Thumb width at the time of the report
    pub thumb_width: i32,
    /// Raised while a drag is in progress
    pub lifted: bool,
}

impl Indicator {
    /// Observer callbacks that keep `indicator` in sync with a seek bar
    pub fn listener(indicator: &Rc<RefCell<Indicator>>) -> UpdateListener {
        UpdateListener::new()
            .on_start_tracking_touch({
                let indicator = indicator.clone();
                move || indicator.borrow_mut().lifted = true
            })
            .on_stop_tracking_touch({
                let indicator = indicator.clone();
                move |_progress| indicator.borrow_mut().lifted = false
            })
            .on_progress_changed({
                let indicator = indicator.clone();
                move |change| {
                    let mut indicator = indicator.borrow_mut();
                    indicator.progress = change.progress;
                    indicator.center_y = change.center_y;
                    indicator.thumb_width = change.width;
                }
            })
    }

    pub fn label(&self) -> String {
        self.progress.to_string()
    }

    /// Top edge: the thumb center minus half the thumb width
    pub fn top(&self) -> f32 {
        self.center_y as f32 - (self.thumb_width / 2) as f32
    }

    /// Left edge for a square centered on `position`
    pub fn left(position: f32) -> f32 {
        position - INDICATOR_SIZE / 2.0
    }
}

/// Place the indicator square with its horizontal center at `position`
pub fn view<'a, Message: 'a>(indicator: &Indicator, position: f32) -> Element<'a, Message> {
    let lifted = indicator.lifted;

    let square = container(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE)).style(
        move |iced_theme| container::Style {
            background: Some(Background::Color(theme::ACCENT)),
            border: Border::default(),
            shadow: if lifted {
                Shadow {
                    color: theme::shadow_color(iced_theme),
                    offset: Vector::new(0.0, 6.0),
                    blur_radius: 16.0,
                }
            } else {
                Shadow::default()
            },
            ..Default::default()
        },
    );

    container(square)
        .padding(Padding {
            top: indicator.top().max(0.0),
            bottom: 0.0,
            left: Indicator::left(position).max(0.0),
            right: 0.0,
        })
        .into()
}
