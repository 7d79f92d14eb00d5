//! Pitch Stats
//!
//! A local-first match annotation engine: drop color-coded markers on a pitch
//! diagram, tag them with action categories, and keep a history of completed
//! matches with their aggregated stats.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod state;

pub use config::ArchiveConfig;
pub use error::{CategoryError, StorageError};
