//! Seek bar with a draggable thumb over an integer progress range
//!
//! The track is drawn as two lines meeting at the thumb: the played part in
//! the progress color and the rest in the background color. Touch input moves
//! the thumb and notifies the registered [`UpdateListener`].
//!
//! # Design
//!
//! The widget state lives in the application and is drawn through a borrowed
//! canvas [`program`]. Redraw requests clear the geometry cache; the host
//! geometry and thumb bounds are captured on every draw, which goes through
//! `&self`, so they sit in `Cell`s.

pub mod config;
pub mod geometry;
pub mod listener;
pub mod program;
pub mod surface;
pub mod touch;

use std::cell::Cell;

use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Renderer, Size};

pub use config::SeekBarConfig;
pub use geometry::{Bounds, TrackLayout};
pub use listener::{ProgressChange, UpdateListener};
pub use program::view;
pub use surface::{Surface, Thumb};
pub use touch::{TouchAction, TouchEvent, TouchState};

/// Factor applied to the thumb size while it is pressed
pub const THUMB_PRESS_SCALE: f32 = 1.5;

/// Seek bar state and behavior
pub struct SeekBar {
    progress: i32,
    max_progress: i32,
    thumb_size: f32,
    touch_state: TouchState,
    thumb: Thumb,
    progress_height: f32,
    progress_color: Color,
    progress_background_color: Color,
    enable_click_on_thumb_only: bool,
    padding_start: i32,
    padding_end: i32,
    listener: UpdateListener,
    layout: Cell<TrackLayout>,
    thumb_bounds: Cell<Bounds>,
    needs_redraw: Cell<bool>,
    cache: canvas::Cache,
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new(SeekBarConfig::default())
    }
}

impl SeekBar {
    pub fn new(config: SeekBarConfig) -> Self {
        let mut seek_bar = Self {
            progress: 0,
            max_progress: config::DEFAULT_MAX_PROGRESS,
            thumb_size: config.thumb_size,
            touch_state: TouchState::Idle,
            thumb: config.thumb,
            progress_height: config.progress_height,
            progress_color: config.progress_color,
            progress_background_color: config.progress_background_color,
            enable_click_on_thumb_only: config.enable_click_on_thumb_only,
            padding_start: config.padding_start,
            padding_end: config.padding_end,
            listener: UpdateListener::default(),
            layout: Cell::new(TrackLayout::new(0, 0, config.padding_start, config.padding_end)),
            thumb_bounds: Cell::new(Bounds::default()),
            needs_redraw: Cell::new(false),
            cache: canvas::Cache::new(),
        };

        // Goes through the setter like any other assignment, requesting a redraw
        seek_bar.set_max_progress(config.max_progress);
        seek_bar
    }

    #[allow(dead_code)]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Current thumb diameter, enlarged while pressed
    #[allow(dead_code)]
    pub fn thumb_size(&self) -> f32 {
        self.thumb_size
    }

    #[allow(dead_code)]
    pub fn touch_state(&self) -> TouchState {
        self.touch_state
    }

    /// Thumb bounds as last drawn, all zero before the first draw
    #[allow(dead_code)]
    pub fn thumb_bounds(&self) -> Bounds {
        self.thumb_bounds.get()
    }

    /// Host geometry as last measured
    #[allow(dead_code)]
    pub fn layout(&self) -> TrackLayout {
        self.layout.get()
    }

    /// Whether a redraw was requested and has not been drawn yet
    #[allow(dead_code)]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw.get()
    }

    /// X coordinate of the track split point for `progress`
    pub fn position_for(&self, progress: i32) -> f32 {
        self.layout.get().position_for(progress, self.max_progress)
    }

    /// Set the progress, notify the listener, then request a redraw
    ///
    /// The value is not clamped to the range.
    pub fn set_progress(&mut self, progress: i32) {
        self.progress = progress;
        self.listener
            .progress_changed(ProgressChange::new(self.thumb_bounds.get(), progress));
        self.invalidate();
    }

    /// Notify the listener, then set the max progress and request a redraw
    ///
    /// The listener runs before the assignment and is handed `max_progress`
    /// as its progress value, so anything it reads sees the old maximum.
    pub fn set_max_progress(&mut self, max_progress: i32) {
        if max_progress <= 0 {
            tracing::warn!("Seek bar max progress set to {}", max_progress);
        }

        self.listener
            .progress_changed(ProgressChange::new(self.thumb_bounds.get(), max_progress));
        self.max_progress = max_progress;
        self.invalidate();
    }

    /// Register the observer callbacks, replacing any registered before
    pub fn add_update_listener(&mut self, listener: UpdateListener) {
        self.listener = listener;
    }

    /// Update the host geometry, redrawing when it changed
    pub fn measure(&self, size: Size) {
        let layout = TrackLayout::from_bounds(
            Rectangle::with_size(size),
            self.padding_start,
            self.padding_end,
        );

        if self.layout.replace(layout) != layout {
            self.invalidate();
        }
    }

    /// Draw into the cached canvas geometry for `bounds`
    pub fn draw(&self, renderer: &Renderer, bounds: Rectangle) -> canvas::Geometry {
        self.measure(bounds.size());
        self.cache
            .draw(renderer, bounds.size(), |frame| self.render(frame))
    }

    /// Draw the track and the thumb
    pub fn render(&self, surface: &mut impl Surface) {
        let layout = self.layout.get();
        let y = layout.center_y();
        let split = layout.position_for(self.progress, self.max_progress);

        surface.draw_line(
            Point::new(layout.padding_start as f32, y),
            Point::new(split, y),
            self.progress_height,
            self.progress_color,
        );
        surface.draw_line(
            Point::new(split, y),
            Point::new(layout.track_end(), y),
            self.progress_height,
            self.progress_background_color,
        );

        let bounds = layout.thumb_bounds(self.progress, self.max_progress, self.thumb_size);
        self.thumb_bounds.set(bounds);
        surface.draw_thumb(&self.thumb, bounds.to_rectangle());

        self.needs_redraw.set(false);
    }

    /// Whether the hit-test gate would let `event` through right now
    pub fn accepts(&self, event: &TouchEvent) -> bool {
        self.gate(event).is_some()
    }

    /// Handle a touch event, returning whether it was consumed
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        let Some(state) = self.gate(&event) else {
            tracing::trace!(?event, "Touch away from the thumb, ignoring");
            return false;
        };
        self.touch_state = state;

        match event.action {
            TouchAction::Down => {
                self.thumb_size *= THUMB_PRESS_SCALE;
                tracing::debug!(progress = self.progress, "Seek bar drag started");
                self.listener.start_tracking_touch();
                self.update_on_touch(&event);
            }
            TouchAction::Move => self.update_on_touch(&event),
            TouchAction::Up | TouchAction::Cancel => {
                self.thumb_size /= THUMB_PRESS_SCALE;
                tracing::debug!(progress = self.progress, "Seek bar drag stopped");
                self.listener.stop_tracking_touch(self.progress);
                self.touch_state = TouchState::Idle;
                self.invalidate();
            }
        }

        true
    }

    fn gate(&self, event: &TouchEvent) -> Option<TouchState> {
        self.touch_state
            .gate(self.enable_click_on_thumb_only, self.thumb_bounds.get(), event)
    }

    fn update_on_touch(&mut self, event: &TouchEvent) {
        let layout = self.layout.get();

        if event.x < layout.padding_start as f32 {
            self.set_progress(0);
        } else if event.x > layout.track_end() {
            self.set_progress(self.max_progress);
        } else {
            self.touch_state = TouchState::Pressed;
            let progress = layout.progress_at(event.x, self.max_progress);
            self.set_progress(progress);
        }
    }

    fn invalidate(&self) {
        self.cache.clear();
        self.needs_redraw.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        lines: Vec<(Point, Point, f32, Color)>,
        thumbs: Vec<Rectangle>,
        visuals: Vec<Thumb>,
    }

    impl Surface for RecordingSurface {
        fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
            self.lines.push((from, to, stroke_width, color));
        }

        fn draw_thumb(&mut self, thumb: &Thumb, bounds: Rectangle) {
            self.visuals.push(thumb.clone());
            self.thumbs.push(bounds);
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Seen {
        Changed(ProgressChange),
        Start,
        Stop(i32),
    }

    fn recording_listener(seen: &Rc<RefCell<Vec<Seen>>>) -> UpdateListener {
        UpdateListener::new()
            .on_progress_changed({
                let seen = seen.clone();
                move |change| seen.borrow_mut().push(Seen::Changed(change))
            })
            .on_start_tracking_touch({
                let seen = seen.clone();
                move || seen.borrow_mut().push(Seen::Start)
            })
            .on_stop_tracking_touch({
                let seen = seen.clone();
                move |progress| seen.borrow_mut().push(Seen::Stop(progress))
            })
    }

    /// 210 x 40 with 5px insets, drawn once so the thumb bounds are known
    fn laid_out(config: SeekBarConfig) -> SeekBar {
        let seek_bar = SeekBar::new(SeekBarConfig {
            padding_start: 5,
            padding_end: 5,
            ..config
        });
        seek_bar.measure(Size::new(210.0, 40.0));
        seek_bar.render(&mut RecordingSurface::default());
        seek_bar
    }

    fn starts(seen: &[Seen]) -> usize {
        seen.iter().filter(|s| **s == Seen::Start).count()
    }

    fn stops(seen: &[Seen]) -> Vec<i32> {
        seen.iter()
            .filter_map(|s| match s {
                Seen::Stop(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_construction_requests_redraw() {
        let seek_bar = SeekBar::default();
        assert_eq!(seek_bar.progress(), 0);
        assert_eq!(seek_bar.max_progress(), 100);
        assert_eq!(seek_bar.thumb_size(), 35.0);
        assert_eq!(seek_bar.touch_state(), TouchState::Idle);
        assert_eq!(seek_bar.thumb_bounds(), Bounds::default());
        assert!(seek_bar.needs_redraw());
    }

    #[test]
    fn test_render_concrete_scenario() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        seek_bar.set_progress(50);

        let mut surface = RecordingSurface::default();
        seek_bar.render(&mut surface);

        let config = SeekBarConfig::default();
        assert_eq!(
            surface.lines,
            vec![
                (
                    Point::new(5.0, 20.0),
                    Point::new(105.0, 20.0),
                    5.0,
                    config.progress_color
                ),
                (
                    Point::new(105.0, 20.0),
                    Point::new(205.0, 20.0),
                    5.0,
                    config.progress_background_color
                ),
            ]
        );
        assert_eq!(
            surface.thumbs,
            vec![Rectangle::new(Point::new(88.0, 3.0), Size::new(34.0, 34.0))]
        );
        assert_eq!(seek_bar.thumb_bounds().center_x(), 105);
        assert!(!seek_bar.needs_redraw());
    }

    #[test]
    fn test_set_progress_notifies_after_assigning() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));

        seek_bar.set_progress(30);

        assert_eq!(seek_bar.progress(), 30);
        assert!(seek_bar.needs_redraw());
        // Thumb bounds are the ones last drawn, at progress 0
        assert_eq!(
            *seen.borrow(),
            vec![Seen::Changed(ProgressChange {
                center_x: 5,
                center_y: 20,
                width: 34,
                height: 34,
                progress: 30,
            })]
        );
    }

    #[test]
    fn test_set_progress_does_not_clamp() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        seek_bar.set_progress(150);
        assert_eq!(seek_bar.progress(), 150);
        assert_eq!(seek_bar.position_for(150), 305.0);

        seek_bar.set_progress(-10);
        assert_eq!(seek_bar.progress(), -10);
        assert_eq!(seek_bar.position_for(-10), -15.0);
    }

    // The two setters notify in a different order: `set_progress` after the
    // assignment, `set_max_progress` before it. Pinned as is. A callback cannot
    // borrow the widget, so what it knows about the maximum is what it captured,
    // and the notification itself carries the value being assigned.
    #[test]
    fn test_set_max_progress_notifies_before_assigning() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let observed = Rc::new(RefCell::new(Vec::new()));
        let known_max = Rc::new(Cell::new(seek_bar.max_progress()));

        seek_bar.add_update_listener(UpdateListener::new().on_progress_changed({
            let observed = observed.clone();
            let known_max = known_max.clone();
            move |change| observed.borrow_mut().push((known_max.get(), change.progress))
        }));

        seek_bar.set_max_progress(200);
        known_max.set(seek_bar.max_progress());
        seek_bar.set_progress(20);

        assert_eq!(*observed.borrow(), vec![(100, 200), (200, 20)]);
        assert_eq!(seek_bar.max_progress(), 200);
        assert!(seek_bar.needs_redraw());
    }

    #[test]
    fn test_add_update_listener_replaces() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        seek_bar.add_update_listener(recording_listener(&first));
        seek_bar.add_update_listener(recording_listener(&second));
        seek_bar.set_progress(10);

        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn test_touch_concrete_scenario() {
        let mut seek_bar = laid_out(SeekBarConfig {
            enable_click_on_thumb_only: false,
            ..SeekBarConfig::default()
        });

        assert!(seek_bar.on_touch(TouchEvent::down(105.0, 20.0)));
        assert_eq!(seek_bar.progress(), 50);
        assert_eq!(seek_bar.touch_state(), TouchState::Pressed);
    }

    #[test]
    fn test_touch_clamps_to_range() {
        let mut seek_bar = laid_out(SeekBarConfig {
            enable_click_on_thumb_only: false,
            ..SeekBarConfig::default()
        });

        for x in [-50.0, 0.0, 4.9, 5.0] {
            seek_bar.set_progress(42);
            seek_bar.on_touch(TouchEvent::moved(x, 20.0));
            assert_eq!(seek_bar.progress(), 0, "x = {x}");
        }
        for x in [205.0, 205.1, 210.0, 1000.0] {
            seek_bar.set_progress(42);
            seek_bar.on_touch(TouchEvent::moved(x, 20.0));
            assert_eq!(seek_bar.progress(), 100, "x = {x}");
        }
    }

    #[test]
    fn test_gate_rejects_far_down() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));
        seek_bar.set_progress(50);
        seek_bar.render(&mut RecordingSurface::default());
        seen.borrow_mut().clear();

        // Thumb spans 88..=122 x 3..=37
        for (x, y) in [(163.0, 20.0), (47.0, 20.0), (105.0, -38.0), (105.0, 78.0)] {
            assert!(!seek_bar.on_touch(TouchEvent::down(x, y)));
        }

        assert_eq!(seek_bar.progress(), 50);
        assert_eq!(seek_bar.thumb_size(), 35.0);
        assert_eq!(seek_bar.touch_state(), TouchState::Idle);
        assert!(!seek_bar.needs_redraw());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_gate_accepts_down_near_thumb() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));

        // Thumb at progress 0 spans -12..=22 x 3..=37; 60 is within the slop
        assert!(seek_bar.accepts(&TouchEvent::down(60.0, 20.0)));
        assert!(seek_bar.on_touch(TouchEvent::down(60.0, 20.0)));

        assert_eq!(seek_bar.touch_state(), TouchState::Pressed);
        assert_eq!(seek_bar.thumb_size(), 35.0 * 1.5);
        assert_eq!(starts(&seen.borrow()), 1);
        // round(100 * 55 / 200) = round(27.5) = 28
        assert_eq!(seek_bar.progress(), 28);
        assert_eq!(seen.borrow()[0], Seen::Start);
    }

    #[test]
    fn test_drag_follows_pointer_outside_slop() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        assert!(seek_bar.on_touch(TouchEvent::down(5.0, 20.0)));

        // Once pressed the gate no longer looks at the position
        assert!(seek_bar.on_touch(TouchEvent::moved(155.0, 300.0)));
        assert_eq!(seek_bar.progress(), 75);
    }

    #[test]
    fn test_up_restores_size_and_notifies_once() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));

        seek_bar.on_touch(TouchEvent::down(5.0, 20.0));
        seek_bar.on_touch(TouchEvent::moved(105.0, 20.0));
        seek_bar.render(&mut RecordingSurface::default());
        assert!(seek_bar.on_touch(TouchEvent::up(105.0, 20.0)));

        assert_eq!(seek_bar.thumb_size(), 35.0);
        assert_eq!(seek_bar.touch_state(), TouchState::Idle);
        assert!(seek_bar.needs_redraw());
        assert_eq!(stops(&seen.borrow()), vec![50]);
        assert_eq!(seen.borrow().last(), Some(&Seen::Stop(50)));
    }

    #[test]
    fn test_cancel_behaves_like_up() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));

        seek_bar.on_touch(TouchEvent::down(5.0, 20.0));
        assert!(seek_bar.on_touch(TouchEvent::cancel(5.0, 20.0)));

        assert_eq!(seek_bar.thumb_size(), 35.0);
        assert_eq!(seek_bar.touch_state(), TouchState::Idle);
        assert_eq!(stops(&seen.borrow()), vec![0]);
    }

    #[test]
    fn test_pressed_thumb_is_drawn_larger() {
        let mut seek_bar = laid_out(SeekBarConfig::default());
        seek_bar.on_touch(TouchEvent::down(5.0, 20.0));

        let mut surface = RecordingSurface::default();
        seek_bar.render(&mut surface);

        // trunc(52.5 / 2) = 26
        assert_eq!(surface.thumbs[0].width, 52.0);
        assert_eq!(seek_bar.thumb_bounds().top, 20 - 26);
    }

    #[test]
    fn test_svg_thumb_is_drawn_over_thumb_bounds() {
        let handle = iced::widget::svg::Handle::from_memory(
            &b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"[..],
        );
        let seek_bar = laid_out(SeekBarConfig {
            thumb: Thumb::Svg(handle.clone()),
            ..SeekBarConfig::default()
        });

        let mut surface = RecordingSurface::default();
        seek_bar.render(&mut surface);

        assert_eq!(surface.visuals, vec![Thumb::Svg(handle)]);
        assert_eq!(
            surface.thumbs,
            vec![Rectangle::new(Point::new(-12.0, 3.0), Size::new(34.0, 34.0))]
        );
    }

    #[test]
    fn test_gate_disabled_accepts_anywhere() {
        let mut seek_bar = laid_out(SeekBarConfig {
            enable_click_on_thumb_only: false,
            ..SeekBarConfig::default()
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        seek_bar.add_update_listener(recording_listener(&seen));

        assert!(seek_bar.on_touch(TouchEvent::down(205.0, 500.0)));
        assert_eq!(seek_bar.progress(), 100);
        assert_eq!(starts(&seen.borrow()), 1);
    }

    #[test]
    fn test_measure_invalidates_on_change_only() {
        let seek_bar = laid_out(SeekBarConfig::default());
        assert!(!seek_bar.needs_redraw());

        seek_bar.measure(Size::new(210.4, 40.0));
        assert!(!seek_bar.needs_redraw());

        seek_bar.measure(Size::new(300.0, 40.0));
        assert!(seek_bar.needs_redraw());
        assert_eq!(seek_bar.layout(), TrackLayout::new(300, 40, 5, 5));
    }
}
