//! Mapping between engine space and screen space.

use egui::{Pos2, Rect};
use life_orbit_core::Position;

/// Uniform scale plus translation that keeps the orbit center in the middle
/// of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the engine's orbit center.
    pub origin: Pos2,
    pub center: Position,
    pub zoom: f32,
}

impl ViewTransform {
    /// Fit a disc of radius `extent` around `center` into `rect`, leaving
    /// `padding` (a fraction of the half-size) free at the edges.
    pub fn fit(rect: Rect, center: Position, extent: f32, padding: f32) -> Self {
        let half = rect.width().min(rect.height()) / 2.0;
        let usable = half * (1.0 - padding.clamp(0.0, 0.9));
        let zoom = if extent > 0.0 && usable > 0.0 {
            usable / extent
        } else {
            1.0
        };
        Self {
            origin: rect.center(),
            center,
            zoom,
        }
    }

    pub fn to_screen(&self, p: Position) -> Pos2 {
        Pos2::new(
            self.origin.x + (p.x - self.center.x) * self.zoom,
            self.origin.y + (p.y - self.center.y) * self.zoom,
        )
    }

    pub fn to_engine(&self, p: Pos2) -> Position {
        Position::new(
            self.center.x + (p.x - self.origin.x) / self.zoom,
            self.center.y + (p.y - self.origin.y) / self.zoom,
        )
    }

    /// Scale an engine-space length to pixels.
    pub fn scale(&self, length: f32) -> f32 {
        length * self.zoom
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            center: Position::ORIGIN,
            zoom: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_and_scales() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0));
        let view = ViewTransform::fit(rect, Position::ORIGIN, 300.0, 0.0);
        assert_eq!(view.origin, Pos2::new(400.0, 300.0));
        assert!((view.zoom - 1.0).abs() < 1e-6);

        let edge = view.to_screen(Position::new(0.0, -300.0));
        assert!((edge.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_engine_inverse() {
        let rect = Rect::from_min_size(Pos2::new(20.0, 40.0), egui::vec2(500.0, 700.0));
        let view = ViewTransform::fit(rect, Position::new(50.0, -20.0), 420.0, 0.1);
        let p = Position::new(-130.5, 77.25);
        let back = view.to_engine(view.to_screen(p));
        assert!(back.distance(p) < 1e-3);
    }

    #[test]
    fn test_degenerate_extent_keeps_unit_zoom() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        let view = ViewTransform::fit(rect, Position::ORIGIN, 0.0, 0.1);
        assert_eq!(view.zoom, 1.0);
    }
}
