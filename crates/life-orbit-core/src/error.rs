//! Error types for catalog construction.

use thiserror::Error;

use crate::NodeId;

/// Errors raised while building or loading a [`crate::Catalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two entries share the same node id.
    #[error("duplicate life area id: {id}")]
    DuplicateId { id: NodeId },

    /// Orbit radius is negative or not a finite number.
    #[error("invalid orbit radius for {id}: {radius}")]
    InvalidOrbitRadius { id: NodeId, radius: f32 },

    /// Angle offset is not a finite number.
    #[error("invalid angle offset for {id}: {offset}")]
    InvalidAngleOffset { id: NodeId, offset: f32 },

    /// Footprint radius must be finite and positive.
    #[error("invalid footprint radius for {id}: {radius}")]
    InvalidFootprint { id: NodeId, radius: f32 },

    /// Colour string is not `#rrggbb`.
    #[error("invalid colour {value:?} (expected #rrggbb)")]
    InvalidColor { value: String },

    /// Catalog JSON could not be parsed.
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
