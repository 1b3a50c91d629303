//! Life areas, their orbits and satellites.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Smallest on-screen diameter of a life area.
pub const MIN_DISPLAY_SIZE: f32 = 72.0;
/// Largest on-screen diameter of a life area.
pub const MAX_DISPLAY_SIZE: f32 = 140.0;

/// Identifier for a life area within a catalog.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Accent colour, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidColor {
            value: value.to_string(),
        };
        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Rgb {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Fixed circular path of a life area around the shared center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Base distance from the center, before the global radius scale.
    pub radius: f32,
    /// Phase offset added to the global orbit angle (radians).
    pub angle_offset: f32,
}

/// A lightweight item attached to a life area (e.g. a relationship).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satellite {
    pub label: String,
}

impl Satellite {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A visualized life area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeArea {
    pub id: NodeId,
    pub label: String,
    pub color: Rgb,
    /// Visual emphasis in `[0, 1]`. Has no effect on motion.
    pub energy: f32,
    pub orbit: Orbit,
    /// Collision radius.
    pub footprint_radius: f32,
    pub satellites: Vec<Satellite>,
}

impl LifeArea {
    /// Create a life area with a footprint derived from the minimum display size.
    pub fn new(id: u64, label: impl Into<String>, orbit_radius: f32, angle_offset: f32) -> Self {
        Self {
            id: NodeId(id),
            label: label.into(),
            color: Rgb(0x63, 0x66, 0xf1),
            energy: 0.5,
            orbit: Orbit {
                radius: orbit_radius,
                angle_offset,
            },
            footprint_radius: footprint_for_display_size(MIN_DISPLAY_SIZE),
            satellites: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = clamp_energy(energy);
        self
    }

    pub fn with_footprint(mut self, radius: f32) -> Self {
        self.footprint_radius = radius;
        self
    }

    pub fn with_satellites<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.satellites = labels.into_iter().map(Satellite::new).collect();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let radius = self.orbit.radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(CatalogError::InvalidOrbitRadius {
                id: self.id,
                radius,
            });
        }
        if !self.orbit.angle_offset.is_finite() {
            return Err(CatalogError::InvalidAngleOffset {
                id: self.id,
                offset: self.orbit.angle_offset,
            });
        }
        if !self.footprint_radius.is_finite() || self.footprint_radius <= 0.0 {
            return Err(CatalogError::InvalidFootprint {
                id: self.id,
                radius: self.footprint_radius,
            });
        }
        Ok(())
    }
}

pub(crate) fn clamp_energy(energy: f32) -> f32 {
    if energy.is_nan() {
        0.0
    } else {
        energy.clamp(0.0, 1.0)
    }
}

/// Display diameter for a life area with the given score (0..=10) and
/// number of connections.
pub fn display_size(score: f32, connections: usize) -> f32 {
    let score = if score.is_finite() {
        score.clamp(0.0, 10.0)
    } else {
        0.0
    };
    (MIN_DISPLAY_SIZE + 4.0 * score + 6.0 * connections as f32)
        .clamp(MIN_DISPLAY_SIZE, MAX_DISPLAY_SIZE)
}

/// Collision radius for a display diameter.
pub fn footprint_for_display_size(size: f32) -> f32 {
    size / 2.0
}
