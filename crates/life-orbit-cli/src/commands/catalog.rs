//! Catalog commands: print the sample, validate a file, show a summary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use life_orbit_core::sample::sample_catalog;
use life_orbit_core::Catalog;

use crate::config::Config;

/// Pick the catalog for a command: explicit flag, then the configured path,
/// then the built-in sample. Returns the catalog and a label for its source.
pub fn resolve(flag: Option<&Path>, config: &Config) -> Result<(Catalog, String)> {
    match flag.or(config.catalog_path.as_deref()) {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            Ok((catalog, path.display().to_string()))
        }
        None => Ok((sample_catalog(), "sample".to_string())),
    }
}

/// Write the sample catalog as JSON to `output` or stdout.
pub fn sample(output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(&sample_catalog().to_file())?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ Wrote sample catalog to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

/// Load and validate a catalog file.
pub fn validate(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    println!("✅ {}: {} life areas", path.display(), catalog.len());
    Ok(())
}

/// Print a table of the catalog's areas.
pub fn show(path: Option<&Path>, config: &Config) -> Result<()> {
    let (catalog, source) = resolve(path, config)?;

    println!("Catalog: {source}");
    println!("{:-<72}", "");
    println!(
        "{:<6} {:<16} {:<8} {:>7} {:>7} {:>9} {:>6}  satellites",
        "id", "label", "color", "radius", "offset", "footprint", "energy"
    );
    for area in catalog.areas() {
        let satellites: Vec<&str> = area.satellites.iter().map(|s| s.label.as_str()).collect();
        println!(
            "{:<6} {:<16} {:<8} {:>7.1} {:>7.3} {:>9.1} {:>6.2}  {}",
            area.id.to_string(),
            area.label,
            area.color.to_string(),
            area.orbit.radius,
            area.orbit.angle_offset,
            area.footprint_radius,
            area.energy,
            satellites.join(", ")
        );
    }
    if catalog.is_empty() {
        println!("(no life areas)");
    }
    Ok(())
}
