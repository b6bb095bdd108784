//! Drawing seam between the seek bar and the canvas it renders into

use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::{image, svg};
use iced::{Color, Point, Rectangle};

/// Visual drawn at the thumb position
#[derive(Debug, Clone, PartialEq)]
pub enum Thumb {
    /// Filled circle in the given color
    Circle(Color),
    /// Raster image stretched over the thumb bounds
    Image(image::Handle),
    /// Vector image stretched over the thumb bounds
    Svg(svg::Handle),
}

/// Something the seek bar can draw itself onto
pub trait Surface {
    /// Stroke a straight line with butt caps
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color);

    /// Draw `thumb` filling `bounds`
    fn draw_thumb(&mut self, thumb: &Thumb, bounds: Rectangle);
}

impl Surface for canvas::Frame {
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: f32, color: Color) {
        let line = Path::line(from, to);
        self.stroke(
            &line,
            Stroke::default().with_color(color).with_width(stroke_width),
        );
    }

    fn draw_thumb(&mut self, thumb: &Thumb, bounds: Rectangle) {
        match thumb {
            Thumb::Circle(color) => {
                let circle = Path::circle(bounds.center(), bounds.width / 2.0);
                self.fill(&circle, *color);
            }
            Thumb::Image(handle) => {
                self.draw_image(bounds, canvas::Image::new(handle.clone()));
            }
            Thumb::Svg(handle) => {
                self.draw_svg(bounds, handle);
            }
        }
    }
}
