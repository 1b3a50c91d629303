//! Core domain model for the Life Orbit visualization.
//!
//! A *life area* is a labeled node that circles a shared center on its own
//! fixed orbit. This crate owns the static side of that picture: node
//! identities, orbital parameters, footprints, attached satellites and the
//! validated [`Catalog`] a simulation is built from. The moving side lives in
//! `life-orbit-engine`.

mod area;
mod catalog;
mod error;
mod geometry;
pub mod sample;

pub use area::{
    display_size, footprint_for_display_size, LifeArea, NodeId, Orbit, Rgb, Satellite,
    MAX_DISPLAY_SIZE, MIN_DISPLAY_SIZE,
};
pub use catalog::{Catalog, CatalogFile, LifeAreaDef};
pub use error::CatalogError;
pub use geometry::Position;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
