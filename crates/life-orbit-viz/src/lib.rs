//! WASM-compatible egui visualization for the Life Orbit engine.
//!
//! This crate provides an egui-based visualization that can run:
//! - Natively (via eframe)
//! - In the browser (via WASM)

mod app;
mod details;
mod render;
mod settings;
mod ui;
mod view;

pub use app::LifeOrbitApp;
pub use details::{detail_for, AreaDetail};
pub use view::ViewTransform;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the visualization app in WASM context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let started = eframe::WebRunner::new()
            .start(
                "life-orbit-canvas",
                web_options,
                Box::new(|cc| Ok(Box::new(LifeOrbitApp::new(cc)))),
            )
            .await;
        if let Err(err) = started {
            web_sys::console::error_1(&format!("Failed to start eframe: {err:?}").into());
        }
    });
}

/// Check a catalog JSON payload before the page embeds it (called from JavaScript).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn validate_catalog_json(json: &str) -> Result<u32, JsValue> {
    life_orbit_core::Catalog::from_json_str(json)
        .map(|catalog| catalog.len() as u32)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
