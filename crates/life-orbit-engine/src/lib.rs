//! Orbital layout engine for the Life Orbit visualization.
//!
//! Nodes circle a shared center, repel each other on overlap, and can be
//! picked up and dragged without disturbing the rest of the simulation.
//!
//! ## Tick pipeline
//!
//! ```text
//!  pointer events ──▶ DragController ──┐
//!                                      ▼
//!  ┌──────────────┐   ┌──────────────┐   ┌────────────────────┐
//!  │ (a) pin held │──▶│ (b) orbit    │──▶│ (c) collision pass │
//!  │     node     │   │  reacquire   │   │   (own cadence)    │
//!  └──────────────┘   └──────────────┘   └────────────────────┘
//!          │                  │                    │
//!          └──────────────────┴────────────────────┘
//!                             ▼
//!                      PositionStore ──▶ FrameSnapshot ──▶ renderer
//! ```
//!
//! The engine is single-owner and synchronous: hosts call
//! [`OrbitEngine::advance`] from their timer or frame loop and feed pointer
//! input through [`OrbitEngine::apply`] (or the individual pointer methods).

mod collision;
mod config;
mod drag;
mod engine;
mod error;
mod events;
mod orbit;
mod scheduler;
mod snapshot;
mod state;
mod store;

pub use collision::{CollisionReport, CollisionResolver, COINCIDENT_EPSILON};
pub use config::{
    EngineTuning, SimulationConfig, MAX_ORBIT_SPEED, MIN_PUSH_FACTOR, RADIUS_SCALE_RANGE,
};
pub use drag::{DragController, Grip, Release};
pub use engine::{OrbitEngine, TickReport};
pub use error::EngineError;
pub use events::{parse_script, PointerEvent, ScriptedEvent};
pub use orbit::{orbit_target, wrap_angle, OrbitDriver};
pub use scheduler::{FixedStep, ScheduledTick, TickSchedule};
pub use snapshot::{satellite_frames, FrameSnapshot, NodeFrame, SatelliteFrame};
pub use state::{InteractionState, SimulationState};
pub use store::PositionStore;

pub use life_orbit_core::{Catalog, LifeArea, NodeId, Position};

/// Result type for script parsing.
pub type Result<T> = std::result::Result<T, EngineError>;

