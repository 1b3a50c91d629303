//! Authoritative table of current node positions.

use std::collections::{BTreeMap, HashMap};

use life_orbit_core::{NodeId, Position};

/// One position per node, addressable by id or by slot.
///
/// Slots follow catalog order and never change for the lifetime of the
/// store, so the tick loops index by slot and the public API by id.
#[derive(Debug, Clone)]
pub struct PositionStore {
    ids: Vec<NodeId>,
    positions: Vec<Position>,
    slots: HashMap<NodeId, usize>,
}

impl PositionStore {
    /// Create a store with one entry per id, all at `initial`.
    pub fn new(ids: impl IntoIterator<Item = NodeId>, initial: Position) -> Self {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        let slots = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let positions = vec![initial; ids.len()];
        Self {
            ids,
            positions,
            slots,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<Position> {
        self.slot_of(id).map(|slot| self.positions[slot])
    }

    /// Overwrite the position of `id`. Unknown ids and non-finite
    /// positions are ignored; returns whether the write happened.
    pub fn set(&mut self, id: NodeId, position: Position) -> bool {
        match self.slot_of(id) {
            Some(slot) => self.set_slot(slot, position),
            None => false,
        }
    }

    /// Snapshot of every position keyed by id.
    pub fn all(&self) -> BTreeMap<NodeId, Position> {
        self.ids
            .iter()
            .copied()
            .zip(self.positions.iter().copied())
            .collect()
    }

    pub fn slot_of(&self, id: NodeId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub fn id_at(&self, slot: usize) -> Option<NodeId> {
        self.ids.get(slot).copied()
    }

    pub(crate) fn at(&self, slot: usize) -> Position {
        self.positions[slot]
    }

    pub(crate) fn set_slot(&mut self, slot: usize, position: Position) -> bool {
        if !position.is_finite() {
            return false;
        }
        match self.positions.get_mut(slot) {
            Some(current) => {
                *current = position;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
