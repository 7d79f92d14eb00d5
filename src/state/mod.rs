//! State management module
//!
//! This module contains the core data structures for match annotation:
//! - Color: RGBA values and their `#RRGGBBAA` codec
//! - Category: Color-to-action associations
//! - Marker: Normalized pitch positions with an optional direction
//! - MarkerStore: The live marker stack for the match being annotated
//! - MatchSetup: Teams, date, and pitch type
//! - SavedMatch: The persisted record of a completed match
//! - StatsSnapshot: Per-action counts derived from markers

mod color;
mod category;
mod marker;
mod marker_store;
mod setup;
mod saved_match;
mod stats;

pub use color::*;
pub use category::*;
pub use marker::*;
pub use marker_store::*;
pub use setup::*;
pub use saved_match::*;
pub use stats::*;
