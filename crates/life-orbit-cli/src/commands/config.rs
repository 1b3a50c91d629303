//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::config::Config;

const KEYS: &str = "orbit-speed, radius-scale, paused, catalog, reacquire-rate, release-rate, \
settle-distance, min-separation, footprint-spacing, push-factor, click-threshold, \
satellite-radius, satellite-spin, orbit-interval-ms, collision-interval-ms, max-catch-up";

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    let sim = &config.simulation;
    let tuning = &config.tuning;

    println!("Life Orbit Configuration");
    println!("{:-<40}", "");
    println!("Orbit speed:          {}", sim.orbit_speed);
    println!("Radius scale:         {}", sim.radius_scale);
    println!("Paused:               {}", sim.paused);
    println!(
        "Catalog:              {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in sample)".to_string())
    );
    println!();
    println!("Reacquire rate:       {}", tuning.reacquire_rate);
    println!("Release rate:         {}", tuning.release_rate);
    println!("Settle distance:      {}", tuning.settle_distance);
    println!("Min separation:       {}", tuning.min_separation);
    println!("Footprint spacing:    {}", tuning.footprint_spacing);
    println!("Push factor:          {}", tuning.push_factor);
    println!("Click threshold:      {}", tuning.click_threshold);
    println!("Satellite radius:     {}", tuning.satellite_radius);
    println!("Satellite spin:       {}", tuning.satellite_spin);
    println!("Orbit interval:       {} ms", tuning.orbit_interval_ms);
    println!("Collision interval:   {} ms", tuning.collision_interval_ms);
    println!("Max catch-up:         {}", tuning.max_catch_up);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let sim = &config.simulation;
    let tuning = &config.tuning;
    let value = match key {
        "orbit-speed" | "speed" => sim.orbit_speed.to_string(),
        "radius-scale" | "scale" => sim.radius_scale.to_string(),
        "paused" => sim.paused.to_string(),
        "catalog" => config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        "reacquire-rate" => tuning.reacquire_rate.to_string(),
        "release-rate" => tuning.release_rate.to_string(),
        "settle-distance" => tuning.settle_distance.to_string(),
        "min-separation" => tuning.min_separation.to_string(),
        "footprint-spacing" => tuning.footprint_spacing.to_string(),
        "push-factor" => tuning.push_factor.to_string(),
        "click-threshold" => tuning.click_threshold.to_string(),
        "satellite-radius" => tuning.satellite_radius.to_string(),
        "satellite-spin" => tuning.satellite_spin.to_string(),
        "orbit-interval-ms" => tuning.orbit_interval_ms.to_string(),
        "collision-interval-ms" => tuning.collision_interval_ms.to_string(),
        "max-catch-up" => tuning.max_catch_up.to_string(),
        _ => anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS),
    };

    println!("{}", value);
    Ok(())
}

/// Set a configuration value and save. Values are clamped to their safe
/// range before saving.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let sim = &mut config.simulation;
    let tuning = &mut config.tuning;
    match key {
        "orbit-speed" | "speed" => sim.orbit_speed = parse(key, value)?,
        "radius-scale" | "scale" => sim.radius_scale = parse(key, value)?,
        "paused" => sim.paused = parse(key, value)?,
        "catalog" => {
            config.catalog_path = match value {
                "" | "none" | "sample" => None,
                path => Some(PathBuf::from(path)),
            }
        }
        "reacquire-rate" => tuning.reacquire_rate = parse(key, value)?,
        "release-rate" => tuning.release_rate = parse(key, value)?,
        "settle-distance" => tuning.settle_distance = parse(key, value)?,
        "min-separation" => tuning.min_separation = parse(key, value)?,
        "footprint-spacing" => tuning.footprint_spacing = parse(key, value)?,
        "push-factor" => tuning.push_factor = parse(key, value)?,
        "click-threshold" => tuning.click_threshold = parse(key, value)?,
        "satellite-radius" => tuning.satellite_radius = parse(key, value)?,
        "satellite-spin" => tuning.satellite_spin = parse(key, value)?,
        "orbit-interval-ms" => tuning.orbit_interval_ms = parse(key, value)?,
        "collision-interval-ms" => tuning.collision_interval_ms = parse(key, value)?,
        "max-catch-up" => tuning.max_catch_up = parse(key, value)?,
        _ => anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS),
    }

    *config = config.clone().sanitized();
    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value {value:?} for {key}"))
}
