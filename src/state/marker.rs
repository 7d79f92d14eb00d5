use uuid::Uuid;

use super::Color;

/// A position in the rendering surface's pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current size of the surface the pitch image is rendered on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no usable area cannot map pixels to fractions.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Half-open containment, `[0, width) x [0, height)`.
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A position expressed as fractions of the surface's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const CENTER: NormalizedPoint = NormalizedPoint { x: 0.5, y: 0.5 };

    /// Build a point, clamping each coordinate into `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Normalize a placement tap. Taps outside the surface land on its center.
    pub fn from_pixel(point: PixelPoint, surface: SurfaceSize) -> Self {
        if surface.is_degenerate() {
            return Self::CENTER;
        }
        let point = if surface.contains(point) {
            point
        } else {
            surface.center()
        };
        Self::new(point.x / surface.width, point.y / surface.height)
    }

    /// Normalize a drag position. Positions past an edge are pinned to that edge.
    pub fn from_pixel_clamped(point: PixelPoint, surface: SurfaceSize) -> Self {
        if surface.is_degenerate() {
            return Self::CENTER;
        }
        Self::new(point.x / surface.width, point.y / surface.height)
    }

    /// Project back into pixel space for a surface of the given size.
    pub fn to_pixel(&self, surface: SurfaceSize) -> PixelPoint {
        PixelPoint::new(self.x * surface.width, self.y * surface.height)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.5
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// A recorded action on the pitch.
///
/// `end_x`/`end_y` are set exactly when `is_directional` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Unique identifier
    pub id: Uuid,
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position
    pub y: f64,
    /// Color of the category that was selected when placed
    pub color: Color,
    /// User-entered label, usually a player number
    pub label: String,
    pub is_directional: bool,
    pub end_x: Option<f64>,
    pub end_y: Option<f64>,
}

impl Marker {
    /// Create a non-directional marker at the given point
    pub fn new(point: NormalizedPoint, color: Color, label: impl Into<String>) -> Self {
        // Struct literals skip the clamp in `NormalizedPoint::new`.
        let point = NormalizedPoint::new(point.x, point.y);
        Self {
            id: Uuid::new_v4(),
            x: point.x,
            y: point.y,
            color,
            label: label.into(),
            is_directional: false,
            end_x: None,
            end_y: None,
        }
    }

    pub fn start_point(&self) -> NormalizedPoint {
        NormalizedPoint {
            x: self.x,
            y: self.y,
        }
    }

    /// Where the direction arrow ends; the start point when there is none.
    pub fn end_point(&self) -> NormalizedPoint {
        if !self.is_directional {
            return self.start_point();
        }
        NormalizedPoint {
            x: self.end_x.unwrap_or(self.x),
            y: self.end_y.unwrap_or(self.y),
        }
    }

    /// Point the marker in a direction, replacing any previous end point.
    pub fn set_direction(&mut self, end: NormalizedPoint) {
        let end = NormalizedPoint::new(end.x, end.y);
        self.is_directional = true;
        self.end_x = Some(end.x);
        self.end_y = Some(end.y);
    }
}
