//! Pixel geometry for the seek bar
//!
//! All positions are integer pixels, mirroring how the track and thumb are
//! laid out on screen. The value -> position direction truncates, the
//! position -> value direction rounds, so a round trip may drift by one.

use iced::Rectangle;

/// Host geometry the track is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackLayout {
    pub width: i32,
    pub height: i32,
    /// Inset before the start of the track
    pub padding_start: i32,
    /// Inset after the end of the track
    pub padding_end: i32,
}

impl TrackLayout {
    pub fn new(width: i32, height: i32, padding_start: i32, padding_end: i32) -> Self {
        Self {
            width,
            height,
            padding_start,
            padding_end,
        }
    }

    /// Build a layout from canvas bounds, truncating to whole pixels
    pub fn from_bounds(bounds: Rectangle, padding_start: i32, padding_end: i32) -> Self {
        Self::new(
            bounds.width as i32,
            bounds.height as i32,
            padding_start,
            padding_end,
        )
    }

    /// Width of the mapped range, excluding both insets
    pub fn track_width(&self) -> i32 {
        self.width - (self.padding_start + self.padding_end)
    }

    /// Vertical center of the track line
    pub fn center_y(&self) -> f32 {
        self.height as f32 / 2.0
    }

    /// X coordinate where the track ends
    pub fn track_end(&self) -> f32 {
        self.width as f32 - self.padding_end as f32
    }

    /// Offset of `progress` along the track, before adding the start inset
    ///
    /// Multiplies first and divides with truncation. A zero `max_progress`
    /// yields an offset of zero instead of trapping.
    pub fn progress_offset(&self, progress: i32, max_progress: i32) -> i32 {
        self.track_width()
            .wrapping_mul(progress)
            .checked_div(max_progress)
            .unwrap_or(0)
    }

    /// X coordinate of the split point between the played and remaining track
    pub fn position_for(&self, progress: i32, max_progress: i32) -> f32 {
        self.progress_offset(progress, max_progress) as f32 + self.padding_start as f32
    }

    /// Map an x coordinate that lies inside the track to a progress value
    ///
    /// The coordinate is truncated to a whole pixel, the product is taken in
    /// integer arithmetic and the quotient is rounded half away from zero.
    pub fn progress_at(&self, x: f32, max_progress: i32) -> i32 {
        let x = x as i32;
        let scaled = max_progress.wrapping_mul(x - self.padding_start);
        (scaled as f64 / self.track_width() as f64).round() as i32
    }

    /// Square thumb bounds centered on the split point for `progress`
    pub fn thumb_bounds(&self, progress: i32, max_progress: i32, thumb_size: f32) -> Bounds {
        let half = (thumb_size / 2.0) as i32;
        let left = self.progress_offset(progress, max_progress) + self.padding_start - half;
        let top = self.height / 2 - half;

        Bounds {
            left,
            top,
            right: left + half * 2,
            bottom: self.height / 2 + half,
        }
    }
}

/// Integer rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether a point lies inside these bounds grown by `margin` on every side
    ///
    /// Edges are inclusive.
    pub fn contains_with_margin(&self, x: f32, y: f32, margin: i32) -> bool {
        let outside = x > (self.right + margin) as f32
            || x < (self.left - margin) as f32
            || y < (self.top - margin) as f32
            || y > (self.bottom + margin) as f32;

        !outside
    }

    pub fn to_rectangle(self) -> Rectangle {
        Rectangle {
            x: self.left as f32,
            y: self.top as f32,
            width: self.width() as f32,
            height: self.height() as f32,
        }
    }
}
