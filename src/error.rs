//! Error types for category registration and archive storage.

use std::io;
use thiserror::Error;

/// Errors raised while editing the action category registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// Another category already uses this (quantized) color.
    #[error("Color {color} is already assigned to another action")]
    DuplicateColor { color: String },

    /// The color is the "no category selected" value, so markers could never use it.
    #[error("Color {color} is reserved for \"no selection\"")]
    ReservedColor { color: String },
}

/// Errors raised while persisting the match archive.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
