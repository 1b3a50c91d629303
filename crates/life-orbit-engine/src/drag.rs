//! Drag controller: exclusive pointer ownership of one node.

use life_orbit_core::Position;

use crate::store::PositionStore;

/// Pointer bookkeeping for the node currently held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grip {
    pub slot: usize,
    /// Last pointer position, in engine space.
    pub pointer: Position,
    /// Where the press started.
    pub origin: Position,
    /// Farthest the pointer has been from `origin`.
    pub max_travel: f32,
}

/// Result of letting go of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub slot: usize,
    pub max_travel: f32,
}

impl Release {
    pub fn is_click(&self, threshold: f32) -> bool {
        self.max_travel < threshold
    }
}

/// A released node on its way back to orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Glide {
    slot: usize,
    /// Distance to target after the previous tick.
    last_distance: f32,
}

/// `Free -> Held -> Free` state machine.
///
/// There is no releasing state; the last released node is only remembered
/// as *gliding* so the orbit driver can bring it home at the release rate.
/// The glide ends once the node has settled or stops closing in on a moving
/// target, after which it follows the regular reacquire rate again.
#[derive(Debug, Default)]
pub struct DragController {
    grip: Option<Grip>,
    gliding: Option<Glide>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held_slot(&self) -> Option<usize> {
        self.grip.map(|g| g.slot)
    }

    pub fn gliding_slot(&self) -> Option<usize> {
        self.gliding.map(|g| g.slot)
    }

    /// Take hold of `slot`. Ignored (returns `false`) while another node is held.
    pub fn grab(&mut self, slot: usize, pointer: Position) -> bool {
        if self.grip.is_some() {
            return false;
        }
        if self.gliding_slot() == Some(slot) {
            self.gliding = None;
        }
        self.grip = Some(Grip {
            slot,
            pointer,
            origin: pointer,
            max_travel: 0.0,
        });
        true
    }

    /// Follow the pointer; returns the held slot, if any.
    pub fn drag_to(&mut self, pointer: Position) -> Option<usize> {
        let grip = self.grip.as_mut()?;
        grip.pointer = pointer;
        grip.max_travel = grip.max_travel.max(grip.origin.distance(pointer));
        Some(grip.slot)
    }

    /// Let go of the held node, which starts gliding back to its orbit.
    pub fn let_go(&mut self) -> Option<Release> {
        let grip = self.grip.take()?;
        self.gliding = Some(Glide {
            slot: grip.slot,
            last_distance: f32::INFINITY,
        });
        Some(Release {
            slot: grip.slot,
            max_travel: grip.max_travel,
        })
    }

    /// Pin the held node to the pointer.
    pub fn apply(&self, store: &mut PositionStore) {
        if let Some(grip) = &self.grip {
            store.set_slot(grip.slot, grip.pointer);
        }
    }

    pub fn end_glide(&mut self) {
        self.gliding = None;
    }

    /// Record the gliding node's distance to its target after a tick.
    /// Returns `true` when that ended the glide.
    pub fn track_glide(&mut self, distance: f32, settle_distance: f32) -> bool {
        let Some(glide) = self.gliding.as_mut() else {
            return false;
        };
        if distance <= settle_distance || distance >= glide.last_distance {
            self.gliding = None;
            return true;
        }
        glide.last_distance = distance;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_grab_is_ignored() {
        let mut drag = DragController::new();
        assert!(drag.grab(0, Position::ORIGIN));
        assert!(!drag.grab(1, Position::new(5.0, 5.0)));
        assert_eq!(drag.held_slot(), Some(0));
    }

    #[test]
    fn test_travel_tracks_farthest_point() {
        let mut drag = DragController::new();
        drag.grab(2, Position::ORIGIN);
        drag.drag_to(Position::new(10.0, 0.0));
        drag.drag_to(Position::new(1.0, 0.0));
        let release = drag.let_go().unwrap();
        assert_eq!(release.slot, 2);
        assert_eq!(release.max_travel, 10.0);
        assert!(!release.is_click(4.0));
        assert_eq!(drag.gliding_slot(), Some(2));
        assert_eq!(drag.held_slot(), None);
    }

    #[test]
    fn test_small_wiggle_is_a_click() {
        let mut drag = DragController::new();
        drag.grab(0, Position::ORIGIN);
        drag.drag_to(Position::new(1.0, 1.0));
        assert!(drag.let_go().unwrap().is_click(4.0));
    }

    #[test]
    fn test_glide_ends_when_settled() {
        let mut drag = DragController::new();
        drag.grab(1, Position::ORIGIN);
        drag.let_go();
        assert!(!drag.track_glide(50.0, 1.0));
        assert!(!drag.track_glide(20.0, 1.0));
        assert!(drag.track_glide(0.5, 1.0));
        assert_eq!(drag.gliding_slot(), None);
    }

    #[test]
    fn test_glide_ends_when_distance_stops_shrinking() {
        let mut drag = DragController::new();
        drag.grab(1, Position::ORIGIN);
        drag.let_go();
        assert!(!drag.track_glide(40.0, 1.0));
        assert!(!drag.track_glide(12.0, 1.0));
        assert!(drag.track_glide(12.5, 1.0));
        assert_eq!(drag.gliding_slot(), None);
        assert!(!drag.track_glide(3.0, 1.0));
    }

    #[test]
    fn test_let_go_without_grip_is_none() {
        let mut drag = DragController::new();
        assert!(drag.let_go().is_none());
        assert!(drag.drag_to(Position::ORIGIN).is_none());
    }
}
