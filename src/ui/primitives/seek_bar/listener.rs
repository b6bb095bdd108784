//! Observer callbacks for progress and drag lifecycle

use super::geometry::Bounds;

/// Payload of a progress-changed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressChange {
    /// Horizontal center of the thumb as last drawn
    pub center_x: i32,
    /// Vertical center of the thumb as last drawn
    pub center_y: i32,
    /// Thumb width as last drawn
    pub width: i32,
    /// Thumb height as last drawn
    pub height: i32,
    pub progress: i32,
}

impl ProgressChange {
    pub fn new(thumb: Bounds, progress: i32) -> Self {
        Self {
            center_x: thumb.center_x(),
            center_y: thumb.center_y(),
            width: thumb.width(),
            height: thumb.height(),
            progress,
        }
    }
}

type ProgressChanged = Box<dyn FnMut(ProgressChange)>;
type StartTracking = Box<dyn FnMut()>;
type StopTracking = Box<dyn FnMut(i32)>;

/// Up to three callbacks registered together on a seek bar
///
/// Registering a listener replaces the previous one as a whole, so a slot left
/// empty here clears whatever was registered before.
#[derive(Default)]
pub struct UpdateListener {
    on_progress_changed: Option<ProgressChanged>,
    on_start_tracking_touch: Option<StartTracking>,
    on_stop_tracking_touch: Option<StopTracking>,
}

impl UpdateListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the thumb bounds and the new value whenever progress or
    /// max progress is set
    pub fn on_progress_changed(mut self, f: impl FnMut(ProgressChange) + 'static) -> Self {
        self.on_progress_changed = Some(Box::new(f));
        self
    }

    /// Called when a drag starts
    pub fn on_start_tracking_touch(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_start_tracking_touch = Some(Box::new(f));
        self
    }

    /// Called with the final progress when a drag ends
    pub fn on_stop_tracking_touch(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_stop_tracking_touch = Some(Box::new(f));
        self
    }

    pub(super) fn progress_changed(&mut self, change: ProgressChange) {
        if let Some(f) = self.on_progress_changed.as_mut() {
            f(change);
        }
    }

    pub(super) fn start_tracking_touch(&mut self) {
        if let Some(f) = self.on_start_tracking_touch.as_mut() {
            f();
        }
    }

    pub(super) fn stop_tracking_touch(&mut self, progress: i32) {
        if let Some(f) = self.on_stop_tracking_touch.as_mut() {
            f(progress);
        }
    }
}

impl std::fmt::Debug for UpdateListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateListener")
            .field("on_progress_changed", &self.on_progress_changed.is_some())
            .field("on_start_tracking_touch", &self.on_start_tracking_touch.is_some())
            .field("on_stop_tracking_touch", &self.on_stop_tracking_touch.is_some())
            .finish()
    }
}
