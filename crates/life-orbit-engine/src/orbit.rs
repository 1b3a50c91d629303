//! Orbit driver: global phase and per-node orbital targets.

use std::f32::consts::TAU;

use life_orbit_core::{LifeArea, Orbit, Position};

use crate::config::EngineTuning;
use crate::store::PositionStore;

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Closed-form position on an orbit at `global_angle`.
pub fn orbit_target(
    center: Position,
    orbit: &Orbit,
    radius_scale: f32,
    global_angle: f32,
) -> Position {
    center.on_circle(orbit.radius * radius_scale, global_angle + orbit.angle_offset)
}

/// Borrowed view of everything needed to move free nodes for one tick.
pub struct OrbitDriver<'a> {
    areas: &'a [LifeArea],
    tuning: &'a EngineTuning,
    radius_scale: f32,
    global_angle: f32,
}

impl<'a> OrbitDriver<'a> {
    pub fn new(
        areas: &'a [LifeArea],
        tuning: &'a EngineTuning,
        radius_scale: f32,
        global_angle: f32,
    ) -> Self {
        Self {
            areas,
            tuning,
            radius_scale,
            global_angle,
        }
    }

    /// Orbital target of the node in `slot`.
    pub fn target(&self, slot: usize) -> Position {
        orbit_target(
            self.tuning.center,
            &self.areas[slot].orbit,
            self.radius_scale,
            self.global_angle,
        )
    }

    /// Pull every free node a fraction of the way toward its target.
    ///
    /// `held` is skipped entirely. `gliding` moves at `release_rate`
    /// instead of `reacquire_rate`.
    pub fn reacquire(&self, store: &mut PositionStore, held: Option<usize>, gliding: Option<usize>) {
        for slot in 0..self.areas.len() {
            if Some(slot) == held {
                continue;
            }
            let rate = if Some(slot) == gliding {
                self.tuning.release_rate
            } else {
                self.tuning.reacquire_rate
            };
            let next = store.at(slot).approach(self.target(slot), rate);
            store.set_slot(slot, next);
        }
    }

    /// Put every node except `held` exactly on its target.
    pub fn snap(&self, store: &mut PositionStore, held: Option<usize>) {
        for slot in (0..self.areas.len()).filter(|slot| Some(*slot) != held) {
            store.set_slot(slot, self.target(slot));
        }
    }

    /// Distance of the node in `slot` from its target.
    pub fn distance_to_target(&self, store: &PositionStore, slot: usize) -> f32 {
        store.at(slot).distance(self.target(slot))
    }
}
