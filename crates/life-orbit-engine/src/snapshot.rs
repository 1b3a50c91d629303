//! Read-only frame output for renderers.

use std::f32::consts::TAU;

use life_orbit_core::{LifeArea, NodeId, Position, Rgb};
use serde::{Deserialize, Serialize};

use crate::config::EngineTuning;
use crate::store::PositionStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFrame {
    pub id: NodeId,
    pub label: String,
    pub color: Rgb,
    pub energy: f32,
    pub position: Position,
    /// Where the orbit currently pulls this node.
    pub target: Position,
    pub footprint_radius: f32,
    pub held: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteFrame {
    pub parent: NodeId,
    pub index: usize,
    pub label: String,
    pub position: Position,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub global_angle: f32,
    pub paused: bool,
    pub held: Option<NodeId>,
    pub selected: Option<NodeId>,
    pub nodes: Vec<NodeFrame>,
    pub satellites: Vec<SatelliteFrame>,
}

impl FrameSnapshot {
    pub fn node(&self, id: NodeId) -> Option<&NodeFrame> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Satellites ride a small circle around their parent's current position,
/// evenly spaced and spinning with the global angle.
pub fn satellite_frames(
    areas: &[LifeArea],
    store: &PositionStore,
    tuning: &EngineTuning,
    global_angle: f32,
) -> Vec<SatelliteFrame> {
    let mut frames = Vec::new();
    for (slot, area) in areas.iter().enumerate() {
        let count = area.satellites.len();
        if count == 0 {
            continue;
        }
        let parent = store.at(slot);
        let base = global_angle * tuning.satellite_spin + area.orbit.angle_offset;
        for (index, satellite) in area.satellites.iter().enumerate() {
            let angle = base + TAU * index as f32 / count as f32;
            frames.push(SatelliteFrame {
                parent: area.id,
                index,
                label: satellite.label.clone(),
                position: parent.on_circle(tuning.satellite_radius, angle),
            });
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satellites_are_evenly_spaced_around_parent() {
        let areas = vec![LifeArea::new(1, "Career", 100.0, 0.0).with_satellites([
            "Manager", "Mentor", "Team", "Peer",
        ])];
        let mut store = PositionStore::new([NodeId(1)], Position::ORIGIN);
        store.set(NodeId(1), Position::new(50.0, 50.0));
        let tuning = EngineTuning::default();

        let frames = satellite_frames(&areas, &store, &tuning, 0.0);
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            let d = frame.position.distance(Position::new(50.0, 50.0));
            assert!((d - tuning.satellite_radius).abs() < 1e-3);
        }
        // Opposite satellites of four sit on a diameter.
        let across = frames[0].position.distance(frames[2].position);
        assert!((across - 2.0 * tuning.satellite_radius).abs() < 1e-3);
    }
}
