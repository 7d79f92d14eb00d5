//! Geometry for drawing directional markers as arrows.

use crate::constants::{ARROW_HEAD_ANGLE, ARROW_HEAD_LENGTH, ARROW_LINE_WIDTH};
use crate::state::{Marker, PixelPoint, SurfaceSize};

/// Pixel-space outline of a marker's direction arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Shaft start (the marker position).
    pub start: PixelPoint,
    /// Shaft end (the arrow tip).
    pub end: PixelPoint,
    /// Barb end points of the arrow head; `None` for a zero-length shaft.
    pub head: Option<[PixelPoint; 2]>,
    /// Stroke width in pixels.
    pub line_width: f64,
}

impl ArrowGeometry {
    /// Arrow for a marker rendered on `surface`, or `None` if it has no direction.
    pub fn for_marker(marker: &Marker, surface: SurfaceSize) -> Option<Self> {
        if !marker.is_directional {
            return None;
        }
        let start = marker.start_point().to_pixel(surface);
        let end = marker.end_point().to_pixel(surface);
        Some(Self::between(start, end))
    }

    /// Arrow from `start` to `end` in pixel space.
    pub fn between(start: PixelPoint, end: PixelPoint) -> Self {
        Self {
            start,
            end,
            head: arrow_head(start, end),
            line_width: ARROW_LINE_WIDTH,
        }
    }

    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

fn arrow_head(start: PixelPoint, end: PixelPoint) -> Option<[PixelPoint; 2]> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.hypot(dy) <= f64::EPSILON {
        return None;
    }
    let angle = dy.atan2(dx);
    let barb = |offset: f64| {
        PixelPoint::new(
            end.x - ARROW_HEAD_LENGTH * (angle + offset).cos(),
            end.y - ARROW_HEAD_LENGTH * (angle + offset).sin(),
        )
    };
    Some([barb(ARROW_HEAD_ANGLE), barb(-ARROW_HEAD_ANGLE)])
}
