//! Real-time headless run: tick at the engine's cadence and stream frames
//! as JSON lines on stdout.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use life_orbit_engine::OrbitEngine;
use tracing::info;

use crate::commands::catalog;
use crate::config::Config;
use crate::ticker::{self, TickerPlan};

pub async fn execute(
    config: &Config,
    catalog_path: Option<&Path>,
    ticks: Option<u64>,
    every: u64,
) -> Result<()> {
    let (catalog, source) = catalog::resolve(catalog_path, config)?;
    info!(source = %source, areas = catalog.len(), "starting real-time run");

    let engine = OrbitEngine::new(catalog, config.simulation, config.tuning);
    let (mut frames, _guard) = ticker::spawn(engine, TickerPlan { every, limit: ticks });

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut emitted = 0u64;
    loop {
        tokio::select! {
            frame = frames.recv() => {
                let Some(frame) = frame else { break };
                let line = serde_json::to_string(&frame)?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{line}").context("Failed to write frame")?;
                stdout.flush()?;
                emitted += 1;
            }
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
    }

    info!(frames = emitted, "run finished");
    Ok(())
}
