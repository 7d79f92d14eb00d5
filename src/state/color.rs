//! RGBA colors and the `#RRGGBBAA` codec used for persistence and equality.

use tracing::warn;

/// An RGBA color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Fully transparent black; stands for "no category selected".
    pub const NONE: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels (the palette the UI offers).
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Quantize each channel to the nearest 8-bit value.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
            channel_to_byte(self.a),
        ]
    }

    /// Encode as `#RRGGBBAA`. This string is the canonical identity of a color.
    pub fn encode(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    /// Parse a `#RRGGBBAA` string. Returns `None` for anything else.
    pub fn decode(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let [r, g, b, a] = value.to_be_bytes();
        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Parse a `#RRGGBBAA` string, falling back to opaque black.
    pub fn decode_or_default(hex: &str) -> Self {
        Self::decode(hex).unwrap_or_else(|| {
            warn!(color = hex, "Malformed color string, using black");
            Self::BLACK
        })
    }

    /// Whether two colors share the same canonical encoding.
    pub fn same_as(&self, other: &Color) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }

    /// Whether this is the "no selection" sentinel.
    pub fn is_none(&self) -> bool {
        self.same_as(&Color::NONE)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_to_byte(value: f32) -> u8 {
    // NaN saturates to 0 in the cast.
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
