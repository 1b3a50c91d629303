//! Deterministic offline run with optional pointer-event replay.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use life_orbit_engine::{parse_script, FrameSnapshot, OrbitEngine, ScriptedEvent};
use tracing::{debug, info, warn};

use crate::commands::catalog;
use crate::config::Config;

/// Run `ticks` orbit ticks as fast as possible. Each step advances the engine
/// by exactly one orbit interval, so collision passes land on the same
/// cadence as a real-time run.
pub fn execute(
    config: &Config,
    catalog_path: Option<&Path>,
    ticks: u64,
    events: Option<&Path>,
    output: Option<&Path>,
) -> Result<FrameSnapshot> {
    let (catalog, source) = catalog::resolve(catalog_path, config)?;
    let script = match events {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    info!(source = %source, ticks, events = script.len(), "simulating");

    let mut engine = OrbitEngine::new(catalog, config.simulation, config.tuning);
    let step = engine.tick_interval();
    let mut pending = script.into_iter().peekable();

    for _ in 0..ticks {
        let next = engine.state().tick + 1;
        while let Some(scripted) = pending.next_if(|e| e.tick <= next) {
            debug!(tick = next, event = ?scripted.event, "replaying event");
            engine.apply(scripted.event);
        }
        engine.advance(step);
    }

    let unused = pending.count();
    if unused > 0 {
        warn!(unused, "events scheduled after the last tick were not applied");
    }

    let snapshot = engine.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("✅ Wrote final frame (tick {}) to {}", snapshot.tick, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(snapshot)
}

fn load_script(path: &Path) -> Result<Vec<ScriptedEvent>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events = parse_script(&source)
        .with_context(|| format!("Failed to parse events from {}", path.display()))?;
    Ok(events)
}
