//! Pairwise overlap resolution between node footprints.

use std::collections::HashSet;

use life_orbit_core::{LifeArea, Position};
use serde::{Deserialize, Serialize};

use crate::config::EngineTuning;
use crate::store::PositionStore;

/// Pairs closer than this are treated as exactly coincident.
pub const COINCIDENT_EPSILON: f32 = 1e-4;

const GOLDEN_ANGLE: f32 = 2.399_963;

/// Outcome of one resolver pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    pub pairs_checked: usize,
    /// Pairs that were pushed apart.
    pub overlaps: usize,
    /// Coincident pairs skipped this pass.
    pub deferred: usize,
}

/// Pushes overlapping nodes apart a damped step per pass.
///
/// A pair at distance zero has no separating direction. It is skipped on the
/// pass that first sees it and, if still coincident on the following pass,
/// separated along a fixed direction derived from the pair's slots.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    deferred: HashSet<(usize, usize)>,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum center distance for a pair of nodes.
    pub fn separation(tuning: &EngineTuning, a: &LifeArea, b: &LifeArea) -> f32 {
        if tuning.footprint_spacing {
            tuning
                .min_separation
                .max(a.footprint_radius + b.footprint_radius)
        } else {
            tuning.min_separation
        }
    }

    /// Run one pass over all pairs.
    ///
    /// `held` takes part in every pair, but the nudges aimed at it are
    /// dropped: it pushes others away without being moved itself.
    pub fn resolve(
        &mut self,
        areas: &[LifeArea],
        store: &mut PositionStore,
        tuning: &EngineTuning,
        held: Option<usize>,
    ) -> CollisionReport {
        let mut report = CollisionReport::default();
        let mut still_coincident = HashSet::new();
        let n = areas.len().min(store.len());

        for i in 0..n {
            for j in (i + 1)..n {
                report.pairs_checked += 1;

                let a = store.at(i);
                let b = store.at(j);
                let separation = Self::separation(tuning, &areas[i], &areas[j]);
                let delta = b - a;
                let distance = delta.length();
                if distance >= separation {
                    continue;
                }

                let normal = if distance > COINCIDENT_EPSILON {
                    delta * (1.0 / distance)
                } else if self.deferred.contains(&(i, j)) {
                    tie_break_direction(i, j)
                } else {
                    still_coincident.insert((i, j));
                    report.deferred += 1;
                    tracing::debug!(i, j, "coincident pair deferred");
                    continue;
                };

                report.overlaps += 1;
                let push = normal * ((separation - distance) * tuning.push_factor);
                if held != Some(i) {
                    store.set_slot(i, a - push);
                }
                if held != Some(j) {
                    store.set_slot(j, b + push);
                }
            }
        }

        self.deferred = still_coincident;
        report
    }

    /// Forget deferred pairs (e.g. after the positions were reset).
    pub fn clear(&mut self) {
        self.deferred.clear();
    }
}

fn tie_break_direction(i: usize, j: usize) -> Position {
    let angle = (i * 31 + j * 17) as f32 * GOLDEN_ANGLE;
    Position::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_orbit_core::NodeId;

    fn setup(points: &[(f32, f32)]) -> (Vec<LifeArea>, PositionStore) {
        let areas: Vec<LifeArea> = (0..points.len())
            .map(|i| LifeArea::new(i as u64, format!("n{i}"), 100.0, 0.0).with_footprint(30.0))
            .collect();
        let mut store = PositionStore::new(areas.iter().map(|a| a.id), Position::ORIGIN);
        for (slot, (x, y)) in points.iter().enumerate() {
            store.set_slot(slot, Position::new(*x, *y));
        }
        (areas, store)
    }

    fn assert_near(p: Option<Position>, x: f32, y: f32) {
        let p = p.unwrap();
        assert!((p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_symmetric_push() {
        let (areas, mut store) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
        let tuning = EngineTuning::default();
        let report = CollisionResolver::new().resolve(&areas, &mut store, &tuning, None);

        assert_eq!(report.overlaps, 1);
        // overlap 20, push 6 each way
        assert_near(store.get(NodeId(0)), -6.0, 0.0);
        assert_near(store.get(NodeId(1)), 106.0, 0.0);
    }

    #[test]
    fn test_held_node_is_not_pushed() {
        let (areas, mut store) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
        let tuning = EngineTuning::default();
        CollisionResolver::new().resolve(&areas, &mut store, &tuning, Some(0));

        assert_eq!(store.get(NodeId(0)), Some(Position::ORIGIN));
        assert_near(store.get(NodeId(1)), 106.0, 0.0);
    }

    #[test]
    fn test_far_pairs_untouched() {
        let (areas, mut store) = setup(&[(0.0, 0.0), (500.0, 0.0)]);
        let report =
            CollisionResolver::new().resolve(&areas, &mut store, &EngineTuning::default(), None);
        assert_eq!(report.pairs_checked, 1);
        assert_eq!(report.overlaps, 0);
        assert_eq!(store.get(NodeId(1)), Some(Position::new(500.0, 0.0)));
    }

    #[test]
    fn test_coincident_pair_deferred_once() {
        let (areas, mut store) = setup(&[(5.0, 5.0), (5.0, 5.0)]);
        let tuning = EngineTuning::default();
        let mut resolver = CollisionResolver::new();

        let first = resolver.resolve(&areas, &mut store, &tuning, None);
        assert_eq!(first.deferred, 1);
        assert_eq!(store.get(NodeId(0)), store.get(NodeId(1)));

        let second = resolver.resolve(&areas, &mut store, &tuning, None);
        assert_eq!(second.deferred, 0);
        assert_eq!(second.overlaps, 1);
        let d = store
            .get(NodeId(0))
            .unwrap()
            .distance(store.get(NodeId(1)).unwrap());
        assert!((d - 72.0).abs() < 1e-3);
    }

    #[test]
    fn test_separation_ignores_footprints_by_default() {
        let big = LifeArea::new(0, "big", 0.0, 0.0).with_footprint(80.0);
        let other = LifeArea::new(1, "other", 0.0, 0.0).with_footprint(70.0);
        let tuning = EngineTuning::default();
        assert_eq!(CollisionResolver::separation(&tuning, &big, &other), 120.0);

        let spaced = EngineTuning {
            footprint_spacing: true,
            ..tuning
        };
        assert_eq!(CollisionResolver::separation(&spaced, &big, &other), 150.0);
    }
}
