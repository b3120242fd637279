//! # Mesh Errors
//!
//! Error types for profile loading and mesh generation.
//!
//! ## Error Policy
//!
//! - Profile parsing is one-shot: the first malformed line aborts the load
//! - No partial profile or partial mesh is ever returned alongside an error

use config::constants::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while loading profiles or generating meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Profile file missing or unreadable
    #[error("Failed to read profile {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed profile contents
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Too many vertices for a u32 index buffer
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Rejected pipeline configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl MeshError {
    /// Creates a profile format error for a 1-based line number.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns the format message, if this is a format error.
    pub fn format_message(&self) -> Option<&str> {
        match self {
            Self::Format { message, .. } => Some(message),
            _ => None,
        }
    }
}
