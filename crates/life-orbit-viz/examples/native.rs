//! Native desktop runner for life-orbit-viz development.
//!
//! Run with: cargo run --example native --features native
//! With a catalog file: cargo run --example native --features native -- --catalog areas.json

use std::path::PathBuf;

use eframe::{run_native, NativeOptions};
use life_orbit_core::{sample::sample_catalog, Catalog};
use life_orbit_viz::LifeOrbitApp;

fn main() -> eframe::Result<()> {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("life_orbit_viz=debug".parse().unwrap())
                    .add_directive("life_orbit_engine=debug".parse().unwrap()),
            )
            .init();
    }

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut catalog_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "-c" => {
                if i + 1 < args.len() {
                    catalog_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --catalog requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Life Orbit Viz - Native Development Runner");
                println!();
                println!("Usage: native [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --catalog, -c <PATH>  Load life areas from a JSON catalog");
                println!("  --help, -h            Show this help message");
                println!();
                println!("Keyboard Shortcuts:");
                println!("  Space   Pause / resume orbiting");
                println!("  R       Reset every area onto its orbit");
                println!("  Esc     Close the detail card");
                println!("  Tab     Toggle sidebar");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let (catalog, source) = match &catalog_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => (catalog, path.display().to_string()),
            Err(err) => {
                eprintln!("Error: failed to load {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => (sample_catalog(), "sample".to_string()),
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Life Orbit - Development"),
        ..Default::default()
    };

    run_native(
        "Life Orbit",
        options,
        Box::new(move |cc| Ok(Box::new(LifeOrbitApp::from_catalog(cc, catalog, source)))),
    )
}
