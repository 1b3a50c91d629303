//! Runtime controls and tuning constants.
//!
//! Every value that reaches the engine from the outside goes through a
//! `sanitized` step: out-of-range or non-finite input is clamped (or falls
//! back to the default) instead of being rejected.

use std::time::Duration;

use life_orbit_core::Position;
use serde::{Deserialize, Serialize};

/// Upper bound for `orbit_speed` (radians per tick).
pub const MAX_ORBIT_SPEED: f32 = 0.25;
/// Bounds for `radius_scale`.
pub const RADIUS_SCALE_RANGE: (f32, f32) = (0.1, 3.0);
/// Smallest push factor the sanitizer lets through.
pub const MIN_PUSH_FACTOR: f32 = 0.01;

/// User-facing simulation controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Global angle delta per orbit tick (radians).
    pub orbit_speed: f32,
    /// Multiplier applied to every node's orbit radius.
    pub radius_scale: f32,
    /// Stops orbit and collision work; dragging stays responsive.
    pub paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 0.004,
            radius_scale: 1.0,
            paused: false,
        }
    }
}

impl SimulationConfig {
    /// Copy of `self` with every field in its safe range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            orbit_speed: clamp_or(self.orbit_speed, 0.0, MAX_ORBIT_SPEED, defaults.orbit_speed),
            radius_scale: clamp_or(
                self.radius_scale,
                RADIUS_SCALE_RANGE.0,
                RADIUS_SCALE_RANGE.1,
                defaults.radius_scale,
            ),
            paused: self.paused,
        }
    }
}

/// Hand-tuned constants of the layout.
///
/// The defaults are the hand-tuned values of the visualization; they are
/// configuration, not derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// Fraction of the remaining distance a free node covers per tick.
    pub reacquire_rate: f32,
    /// Rate used by a just-released node until it settles.
    pub release_rate: f32,
    /// Distance below which a released node counts as settled. A glide also
    /// ends on the first tick its distance stops shrinking, which is where a
    /// moving target leaves it.
    pub settle_distance: f32,
    /// Minimum center distance between two nodes.
    pub min_separation: f32,
    /// Widen a pair's separation to the sum of its footprints when that is
    /// larger than `min_separation`. Off by default.
    pub footprint_spacing: bool,
    /// Share of the overlap each node of a pair moves per pass.
    pub push_factor: f32,
    /// Pointer travel below which a press counts as a click.
    pub click_threshold: f32,
    /// Distance of satellites from their parent.
    pub satellite_radius: f32,
    /// Satellite angular speed relative to the global orbit angle.
    pub satellite_spin: f32,
    pub orbit_interval_ms: u64,
    pub collision_interval_ms: u64,
    /// Most orbit ticks a single `advance` call may run.
    pub max_catch_up: u32,
    /// Shared orbit center in engine space.
    pub center: Position,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            reacquire_rate: 0.05,
            release_rate: 0.08,
            settle_distance: 1.0,
            min_separation: 120.0,
            footprint_spacing: false,
            push_factor: 0.3,
            click_threshold: 4.0,
            satellite_radius: 34.0,
            satellite_spin: 2.0,
            orbit_interval_ms: 16,
            collision_interval_ms: 48,
            max_catch_up: 8,
            center: Position::ORIGIN,
        }
    }
}

impl EngineTuning {
    /// Copy of `self` with rates and the push factor in `(0, 1)`, distances
    /// non-negative and intervals of at least one millisecond.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            reacquire_rate: clamp_or(self.reacquire_rate, 0.001, 0.5, d.reacquire_rate),
            release_rate: clamp_or(self.release_rate, 0.001, 0.5, d.release_rate),
            settle_distance: clamp_or(self.settle_distance, 0.0, f32::MAX, d.settle_distance),
            min_separation: clamp_or(self.min_separation, 0.0, f32::MAX, d.min_separation),
            footprint_spacing: self.footprint_spacing,
            // Above 0.5 a pair would cross over in one pass; zero would stop
            // collision resolution altogether.
            push_factor: clamp_or(self.push_factor, MIN_PUSH_FACTOR, 0.5, d.push_factor),
            click_threshold: clamp_or(self.click_threshold, 0.0, f32::MAX, d.click_threshold),
            satellite_radius: clamp_or(self.satellite_radius, 0.0, f32::MAX, d.satellite_radius),
            satellite_spin: clamp_or(self.satellite_spin, -16.0, 16.0, d.satellite_spin),
            orbit_interval_ms: self.orbit_interval_ms.max(1),
            collision_interval_ms: self.collision_interval_ms.max(1),
            max_catch_up: self.max_catch_up.max(1),
            center: if self.center.is_finite() {
                self.center
            } else {
                d.center
            },
        }
    }

    pub fn orbit_interval(&self) -> Duration {
        Duration::from_millis(self.orbit_interval_ms)
    }

    pub fn collision_interval(&self) -> Duration {
        Duration::from_millis(self.collision_interval_ms)
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
