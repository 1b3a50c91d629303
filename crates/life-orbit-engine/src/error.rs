//! Error types for engine construction and scripted input.
//!
//! Running simulations never fail; these only cover building an engine from
//! host data and parsing pointer scripts.

use life_orbit_core::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog could not be built.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A line of a pointer event script is not valid JSON.
    #[error("invalid pointer script at line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
