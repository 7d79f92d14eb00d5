//! Shared constants: storage key, review surface size, and arrow styling.

use crate::state::SurfaceSize;

/// Storage key holding the serialized match history.
pub const SAVED_MATCHES_KEY: &str = "savedMatches";

/// Directory name used under the platform data root.
pub const APP_DIR_NAME: &str = "PitchStats";

/// Fixed surface the review screen renders saved markers onto.
pub const REVIEW_SURFACE: SurfaceSize = SurfaceSize {
    width: 1366.0,
    height: 900.0,
};

pub const ARROW_LINE_WIDTH: f64 = 2.0;
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
pub const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;
