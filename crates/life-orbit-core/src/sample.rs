//! Built-in catalog for demos and headless runs.

use std::f32::consts::TAU;

use crate::{Catalog, LifeArea, Rgb};

/// Six life areas on two interleaved rings, each with a few relationships.
pub fn sample_catalog() -> Catalog {
    let step = TAU / 6.0;
    let areas = vec![
        LifeArea::new(1, "Health", 220.0, 0.0)
            .with_color(Rgb(0x10, 0xb9, 0x81))
            .with_energy(0.8)
            .with_footprint(48.0)
            .with_satellites(["Coach", "Running club"]),
        LifeArea::new(2, "Career", 260.0, step)
            .with_color(Rgb(0x3b, 0x82, 0xf6))
            .with_energy(0.6)
            .with_footprint(54.0)
            .with_satellites(["Manager", "Mentor", "Team"]),
        LifeArea::new(3, "Relationships", 220.0, 2.0 * step)
            .with_color(Rgb(0xec, 0x48, 0x99))
            .with_energy(0.9)
            .with_footprint(58.0)
            .with_satellites(["Partner", "Family", "Friends"]),
        LifeArea::new(4, "Finance", 260.0, 3.0 * step)
            .with_color(Rgb(0xf5, 0x9e, 0x0b))
            .with_energy(0.4)
            .with_footprint(42.0)
            .with_satellites(["Advisor"]),
        LifeArea::new(5, "Growth", 220.0, 4.0 * step)
            .with_color(Rgb(0x8b, 0x5c, 0xf6))
            .with_energy(0.7)
            .with_footprint(46.0)
            .with_satellites(["Book club", "Course"]),
        LifeArea::new(6, "Leisure", 260.0, 5.0 * step)
            .with_color(Rgb(0x06, 0xb6, 0xd4))
            .with_energy(0.5)
            .with_footprint(40.0),
    ];

    // Ids are distinct and every radius/offset above is finite.
    Catalog::from_areas(areas).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_six_areas() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.areas().iter().all(|a| a.energy > 0.0));
    }
}
