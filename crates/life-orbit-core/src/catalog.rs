//! The validated, immutable set of life areas a session is built from.

use std::collections::HashSet;
use std::f32::consts::TAU;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::area::clamp_energy;
use crate::{
    display_size, footprint_for_display_size, CatalogError, LifeArea, NodeId, Orbit, Result, Rgb,
    Satellite,
};

/// A catalog entry as supplied by the host (JSON or code).
///
/// Optional fields are filled in when the catalog is built: a missing
/// `angle_offset` spaces the entry evenly by its index, and a missing
/// `footprint_radius` is derived from `score` and the satellite count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeAreaDef {
    pub id: u64,
    pub label: String,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default = "default_energy")]
    pub energy: f32,
    pub orbit_radius: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint_radius: Option<f32>,
    /// Host-side score (0..=10) that drives the display size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(default)]
    pub satellites: Vec<String>,
}

fn default_color() -> Rgb {
    Rgb(0x63, 0x66, 0xf1)
}

fn default_energy() -> f32 {
    0.5
}

impl From<&LifeArea> for LifeAreaDef {
    fn from(area: &LifeArea) -> Self {
        Self {
            id: area.id.0,
            label: area.label.clone(),
            color: area.color,
            energy: area.energy,
            orbit_radius: area.orbit.radius,
            angle_offset: Some(area.orbit.angle_offset),
            footprint_radius: Some(area.footprint_radius),
            score: None,
            satellites: area.satellites.iter().map(|s| s.label.clone()).collect(),
        }
    }
}

/// Accepted catalog file shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    List(Vec<LifeAreaDef>),
    Wrapped { areas: Vec<LifeAreaDef> },
}

impl CatalogFile {
    fn into_defs(self) -> Vec<LifeAreaDef> {
        match self {
            CatalogFile::List(defs) => defs,
            CatalogFile::Wrapped { areas } => areas,
        }
    }
}

/// Validated life areas, in render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    areas: Vec<LifeArea>,
}

impl Catalog {
    /// Build a catalog from fully specified areas.
    pub fn from_areas(areas: Vec<LifeArea>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(areas.len());
        for area in &areas {
            if !seen.insert(area.id) {
                return Err(CatalogError::DuplicateId { id: area.id });
            }
            area.validate()?;
        }
        let areas = areas
            .into_iter()
            .map(|mut area| {
                area.energy = clamp_energy(area.energy);
                area
            })
            .collect();
        Ok(Self { areas })
    }

    /// Build a catalog from host definitions, filling in derived fields.
    pub fn from_defs(defs: Vec<LifeAreaDef>) -> Result<Self> {
        let count = defs.len().max(1) as f32;
        let areas = defs
            .into_iter()
            .enumerate()
            .map(|(index, def)| {
                let angle_offset = def
                    .angle_offset
                    .unwrap_or_else(|| index as f32 * TAU / count);
                let footprint_radius = def.footprint_radius.unwrap_or_else(|| {
                    footprint_for_display_size(display_size(
                        def.score.unwrap_or(0.0),
                        def.satellites.len(),
                    ))
                });
                LifeArea {
                    id: NodeId(def.id),
                    label: def.label,
                    color: def.color,
                    energy: def.energy,
                    orbit: Orbit {
                        radius: def.orbit_radius,
                        angle_offset,
                    },
                    footprint_radius,
                    satellites: def.satellites.into_iter().map(Satellite::new).collect(),
                }
            })
            .collect();
        Self::from_areas(areas)
    }

    /// Parse a catalog from JSON (a bare array or `{ "areas": [...] }`).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_defs(file.into_defs())
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), areas = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn areas(&self) -> &[LifeArea] {
        &self.areas
    }

    pub fn get(&self, id: NodeId) -> Option<&LifeArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn into_areas(self) -> Vec<LifeArea> {
        self.areas
    }

    /// The catalog in the shape [`Catalog::from_json_str`] reads back.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile::Wrapped {
            areas: self.areas.iter().map(LifeAreaDef::from).collect(),
        }
    }
}
