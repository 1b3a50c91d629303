//! The orbit engine: one owner, one tick function.

use std::time::Duration;

use life_orbit_core::{Catalog, LifeArea, NodeId, Position};
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionReport, CollisionResolver};
use crate::config::{EngineTuning, SimulationConfig};
use crate::drag::DragController;
use crate::events::PointerEvent;
use crate::orbit::{wrap_angle, OrbitDriver};
use crate::scheduler::TickSchedule;
use crate::snapshot::{satellite_frames, FrameSnapshot, NodeFrame, SatelliteFrame};
use crate::state::{InteractionState, SimulationState};
use crate::store::PositionStore;

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    /// Set when the tick included a collision pass.
    pub collisions: Option<CollisionReport>,
}

/// Orbital layout with collision resolution and pointer dragging.
///
/// All state lives here and changes only through the methods below. Each
/// tick runs, in this order:
///
/// 1. the drag controller pins the held node to the pointer,
/// 2. the orbit driver advances the phase and pulls every free node toward
///    its target,
/// 3. the collision resolver separates overlapping pairs (on its cadence).
///
/// Running separation last keeps re-acquisition from undoing it within the
/// same tick. Steps 2 and 3 are skipped while paused.
pub struct OrbitEngine {
    areas: Vec<LifeArea>,
    store: PositionStore,
    state: SimulationState,
    tuning: EngineTuning,
    resolver: CollisionResolver,
    drag: DragController,
    schedule: TickSchedule,
}

impl OrbitEngine {
    /// Build an engine with every node placed on its orbit.
    pub fn new(catalog: Catalog, config: SimulationConfig, tuning: EngineTuning) -> Self {
        let tuning = tuning.sanitized();
        let areas = catalog.into_areas();
        let store = PositionStore::new(areas.iter().map(|a| a.id), tuning.center);
        let mut engine = Self {
            schedule: TickSchedule::new(&tuning),
            areas,
            store,
            state: SimulationState::new(config),
            tuning,
            resolver: CollisionResolver::new(),
            drag: DragController::new(),
        };
        engine.reset();
        tracing::info!(
            areas = engine.areas.len(),
            orbit_speed = engine.state.config.orbit_speed,
            radius_scale = engine.state.config.radius_scale,
            "orbit engine ready"
        );
        engine
    }

    pub fn with_defaults(catalog: Catalog) -> Self {
        Self::new(catalog, SimulationConfig::default(), EngineTuning::default())
    }

    // ------------------------------------------------------------------
    // Ticking
    // ------------------------------------------------------------------

    /// Run one full tick, collision pass included.
    pub fn tick(&mut self) -> TickReport {
        self.step(true)
    }

    /// Run one tick without a collision pass.
    pub fn tick_orbit(&mut self) -> TickReport {
        self.step(false)
    }

    /// Run whatever ticks are due after `elapsed` wall time.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.schedule.due(elapsed);
        for scheduled in &due {
            self.step(scheduled.collide);
        }
        due.len()
    }

    /// Run one collision pass outside the tick cycle.
    pub fn resolve_collisions(&mut self) -> CollisionReport {
        self.resolver.resolve(
            &self.areas,
            &mut self.store,
            &self.tuning,
            self.drag.held_slot(),
        )
    }

    fn step(&mut self, collide: bool) -> TickReport {
        self.state.tick += 1;
        let tick = self.state.tick;

        self.drag.apply(&mut self.store);

        if self.state.config.paused {
            return TickReport {
                tick,
                collisions: None,
            };
        }

        self.state.global_angle =
            wrap_angle(self.state.global_angle + self.state.config.orbit_speed);

        let held = self.drag.held_slot();
        let gliding = self.drag.gliding_slot();
        let driver = OrbitDriver::new(
            &self.areas,
            &self.tuning,
            self.state.config.radius_scale,
            self.state.global_angle,
        );
        driver.reacquire(&mut self.store, held, gliding);
        if let Some(slot) = gliding {
            let distance = driver.distance_to_target(&self.store, slot);
            if self.drag.track_glide(distance, self.tuning.settle_distance) {
                tracing::debug!(slot, distance, "release glide ended");
            }
        }

        let collisions = collide.then(|| {
            self.resolver
                .resolve(&self.areas, &mut self.store, &self.tuning, held)
        });

        tracing::trace!(tick, angle = self.state.global_angle, ?collisions, "tick");
        TickReport { tick, collisions }
    }

    /// Put every node exactly on its orbital target, bypassing
    /// interpolation. The held node stays with the pointer.
    pub fn reset(&mut self) {
        let held = self.drag.held_slot();
        OrbitDriver::new(
            &self.areas,
            &self.tuning,
            self.state.config.radius_scale,
            self.state.global_angle,
        )
        .snap(&mut self.store, held);
        self.drag.end_glide();
        self.resolver.clear();
        tracing::debug!(angle = self.state.global_angle, "positions reset to orbit");
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    pub fn set_config(&mut self, config: SimulationConfig) {
        self.state.config = config.sanitized();
        tracing::debug!(config = ?self.state.config, "simulation config updated");
    }

    pub fn set_orbit_speed(&mut self, orbit_speed: f32) {
        self.set_config(SimulationConfig {
            orbit_speed,
            ..self.state.config
        });
    }

    pub fn set_radius_scale(&mut self, radius_scale: f32) {
        self.set_config(SimulationConfig {
            radius_scale,
            ..self.state.config
        });
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.config.paused = paused;
    }

    /// Flip pause; returns the new value.
    pub fn toggle_paused(&mut self) -> bool {
        self.state.config.paused = !self.state.config.paused;
        self.state.config.paused
    }

    pub fn set_tuning(&mut self, tuning: EngineTuning) {
        self.tuning = tuning.sanitized();
        self.schedule.retune(&self.tuning);
    }

    // ------------------------------------------------------------------
    // Hold / drag
    // ------------------------------------------------------------------

    /// Topmost node whose footprint contains `point`.
    pub fn pick(&self, point: Position) -> Option<NodeId> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(slot, area)| self.store.at(*slot).distance(point) <= area.footprint_radius)
            .map(|(_, area)| area.id)
    }

    /// Take hold of `id` where it currently is.
    pub fn hold(&mut self, id: NodeId) -> bool {
        match self.store.get(id) {
            Some(position) => self.hold_at(id, position),
            None => {
                tracing::debug!(%id, "hold ignored: unknown node");
                false
            }
        }
    }

    /// Take hold of `id` with the pointer at `point`; the node jumps to the
    /// pointer. Ignored while another node is held.
    pub fn hold_at(&mut self, id: NodeId, point: Position) -> bool {
        let Some(slot) = self.store.slot_of(id) else {
            tracing::debug!(%id, "hold ignored: unknown node");
            return false;
        };
        if !point.is_finite() || !self.drag.grab(slot, point) {
            return false;
        }
        self.store.set_slot(slot, point);
        self.state.interaction.held = Some(id);
        true
    }

    /// Move the held node to `point` immediately.
    pub fn move_held(&mut self, point: Position) -> bool {
        if !point.is_finite() {
            return false;
        }
        match self.drag.drag_to(point) {
            Some(slot) => self.store.set_slot(slot, point),
            None => false,
        }
    }

    /// Let go of the held node. It glides back to its orbit over the
    /// following ticks.
    pub fn release(&mut self) -> Option<NodeId> {
        self.release_inner().map(|(id, _)| id)
    }

    fn release_inner(&mut self) -> Option<(NodeId, bool)> {
        let release = self.drag.let_go()?;
        self.state.interaction.held = None;
        let id = self.store.id_at(release.slot)?;
        Some((id, release.is_click(self.tuning.click_threshold)))
    }

    // ------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------

    /// Press at `point`: holds the node under the pointer, if any.
    pub fn pointer_down(&mut self, point: Position) -> Option<NodeId> {
        if self.drag.held_slot().is_some() {
            return None;
        }
        let id = self.pick(point)?;
        self.hold_at(id, point).then_some(id)
    }

    pub fn pointer_move(&mut self, point: Position) -> bool {
        self.move_held(point)
    }

    /// Release at `point`. A press that barely moved toggles selection.
    pub fn pointer_up(&mut self, point: Position) -> Option<NodeId> {
        self.move_held(point);
        let (id, click) = self.release_inner()?;
        if click {
            self.toggle_selection(id);
        }
        Some(id)
    }

    /// The pointer left the surface: release without selecting.
    pub fn pointer_leave(&mut self) -> Option<NodeId> {
        self.release()
    }

    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.pointer_down(Position::new(x, y));
            }
            PointerEvent::Move { x, y } => {
                self.pointer_move(Position::new(x, y));
            }
            PointerEvent::Up { x, y } => {
                self.pointer_up(Position::new(x, y));
            }
            PointerEvent::Leave => {
                self.pointer_leave();
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select(&mut self, id: NodeId) -> bool {
        if self.store.slot_of(id).is_none() {
            tracing::debug!(%id, "select ignored: unknown node");
            return false;
        }
        self.state.interaction.selected = Some(id);
        true
    }

    pub fn toggle_selection(&mut self, id: NodeId) {
        if self.state.interaction.selected == Some(id) {
            self.clear_selection();
        } else {
            self.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.interaction.selected = None;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.store.get(id)
    }

    /// Current orbital target of `id`.
    pub fn target(&self, id: NodeId) -> Option<Position> {
        let slot = self.store.slot_of(id)?;
        Some(self.driver().target(slot))
    }

    pub fn positions(&self) -> &PositionStore {
        &self.store
    }

    pub fn satellite_positions(&self) -> Vec<SatelliteFrame> {
        satellite_frames(
            &self.areas,
            &self.store,
            &self.tuning,
            self.state.global_angle,
        )
    }

    pub fn nodes(&self) -> &[LifeArea] {
        &self.areas
    }

    pub fn node(&self, id: NodeId) -> Option<&LifeArea> {
        self.store.slot_of(id).map(|slot| &self.areas[slot])
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> SimulationConfig {
        self.state.config
    }

    pub fn tuning(&self) -> &EngineTuning {
        &self.tuning
    }

    pub fn interaction(&self) -> InteractionState {
        self.state.interaction
    }

    /// Wall time between orbit ticks.
    pub fn tick_interval(&self) -> Duration {
        self.schedule.orbit_interval()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let driver = self.driver();
        let interaction = self.state.interaction;
        let nodes = self
            .areas
            .iter()
            .enumerate()
            .map(|(slot, area)| NodeFrame {
                id: area.id,
                label: area.label.clone(),
                color: area.color,
                energy: area.energy,
                position: self.store.at(slot),
                target: driver.target(slot),
                footprint_radius: area.footprint_radius,
                held: interaction.held == Some(area.id),
                selected: interaction.selected == Some(area.id),
            })
            .collect();

        FrameSnapshot {
            tick: self.state.tick,
            global_angle: self.state.global_angle,
            paused: self.state.config.paused,
            held: interaction.held,
            selected: interaction.selected,
            nodes,
            satellites: self.satellite_positions(),
        }
    }

    fn driver(&self) -> OrbitDriver<'_> {
        OrbitDriver::new(
            &self.areas,
            &self.tuning,
            self.state.config.radius_scale,
            self.state.global_angle,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> OrbitEngine {
        let catalog = Catalog::from_areas(vec![
            LifeArea::new(1, "Health", 300.0, 0.0).with_footprint(40.0),
            LifeArea::new(2, "Career", 300.0, std::f32::consts::PI).with_footprint(40.0),
        ])
        .unwrap();
        OrbitEngine::with_defaults(catalog)
    }

    #[test]
    fn test_construction_places_nodes_on_orbit() {
        let engine = engine();
        let p = engine.position(NodeId(1)).unwrap();
        assert!((p.x - 300.0).abs() < 1e-3);
        assert!(p.y.abs() < 1e-3);
    }

    #[test]
    fn test_paused_tick_keeps_angle() {
        let mut engine = engine();
        engine.set_paused(true);
        let report = engine.tick();
        assert_eq!(report.tick, 1);
        assert!(report.collisions.is_none());
        assert_eq!(engine.state().global_angle, 0.0);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut engine = engine();
        assert!(!engine.hold(NodeId(42)));
        assert!(!engine.select(NodeId(42)));
        assert_eq!(engine.interaction(), InteractionState::default());
    }

    #[test]
    fn test_pointer_down_on_empty_space_holds_nothing() {
        let mut engine = engine();
        assert_eq!(engine.pointer_down(Position::ORIGIN), None);
        assert_eq!(engine.interaction().held, None);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut engine = engine();
        let at = engine.position(NodeId(2)).unwrap();

        assert_eq!(engine.pointer_down(at), Some(NodeId(2)));
        assert_eq!(engine.pointer_up(at), Some(NodeId(2)));
        assert_eq!(engine.interaction().selected, Some(NodeId(2)));
        assert_eq!(engine.interaction().held, None);

        engine.pointer_down(at);
        engine.pointer_up(at);
        assert_eq!(engine.interaction().selected, None);
    }

    #[test]
    fn test_drag_does_not_select() {
        let mut engine = engine();
        let at = engine.position(NodeId(1)).unwrap();
        engine.pointer_down(at);
        engine.pointer_move(at + Position::new(30.0, 0.0));
        engine.pointer_up(at + Position::new(30.0, 0.0));
        assert_eq!(engine.interaction().selected, None);
    }

    #[test]
    fn test_leave_releases_without_selecting() {
        let mut engine = engine();
        let at = engine.position(NodeId(1)).unwrap();
        engine.pointer_down(at);
        assert_eq!(engine.pointer_leave(), Some(NodeId(1)));
        assert_eq!(engine.interaction(), InteractionState::default());
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut engine = engine();
        engine.hold(NodeId(1));
        let before = engine.position(NodeId(1));
        assert!(!engine.move_held(Position::new(f32::NAN, 1.0)));
        assert_eq!(engine.position(NodeId(1)), before);
    }

    #[test]
    fn test_controls_are_clamped() {
        let mut engine = engine();
        engine.set_radius_scale(-5.0);
        engine.set_orbit_speed(f32::INFINITY);
        let config = engine.config();
        assert!(config.radius_scale > 0.0);
        assert!(config.orbit_speed.is_finite());
        assert!(engine.toggle_paused());
        assert!(!engine.toggle_paused());
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut engine = engine();
        let interval = engine.tick_interval();
        assert_eq!(engine.advance(interval * 3), 3);
        assert_eq!(engine.state().tick, 3);
    }

    #[test]
    fn test_snapshot_marks_held_and_selected() {
        let mut engine = engine();
        engine.select(NodeId(2));
        engine.hold(NodeId(1));
        let snapshot = engine.snapshot();
        assert!(snapshot.node(NodeId(1)).unwrap().held);
        assert!(snapshot.node(NodeId(2)).unwrap().selected);
        assert_eq!(snapshot.held, Some(NodeId(1)));
    }
}
