//! Node and satellite rendering helpers.

use egui::{Color32, Stroke};
use life_orbit_core::Rgb;

#[derive(Debug, Clone, Copy)]
pub struct NodeVisuals {
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Stroke,
    /// Outer glow radius; `None` when halos are off.
    pub halo: Option<f32>,
    pub label_color: Color32,
}

#[derive(Debug, Clone, Copy)]
pub struct NodeRenderContext {
    pub dark_mode: bool,
    pub zoom: f32,
    pub footprint_radius: f32,
    pub color: Rgb,
    pub energy: f32,
    pub held: bool,
    pub selected: bool,
    pub energy_halos: bool,
    /// Seconds since start, drives the halo pulse.
    pub time: f64,
}

pub fn area_color(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

pub fn resolve_node_visuals(ctx: NodeRenderContext) -> NodeVisuals {
    let radius = (ctx.footprint_radius * ctx.zoom).max(4.0);
    let base = area_color(ctx.color);

    // Low-energy areas fade toward the background.
    let energy = ctx.energy.clamp(0.0, 1.0);
    let fill = base.gamma_multiply(0.45 + 0.55 * energy);

    let stroke = if ctx.held {
        Stroke::new(3.0, held_color(ctx.dark_mode))
    } else if ctx.selected {
        Stroke::new(3.0, selection_color(ctx.dark_mode))
    } else {
        Stroke::new(1.0, base)
    };

    let halo = ctx.energy_halos.then(|| {
        let pulse = 1.0 + 0.06 * energy * (ctx.time as f32 * 2.0).sin();
        radius * (1.15 + 0.25 * energy) * pulse
    });

    NodeVisuals {
        radius,
        fill,
        stroke,
        halo,
        label_color: label_color(ctx.dark_mode),
    }
}

pub fn satellite_radius(zoom: f32) -> f32 {
    (7.0 * zoom).clamp(3.0, 10.0)
}

pub fn orbit_ring_stroke(dark_mode: bool) -> Stroke {
    let color = if dark_mode {
        Color32::from_rgba_unmultiplied(140, 140, 170, 40)
    } else {
        Color32::from_rgba_unmultiplied(80, 80, 110, 50)
    };
    Stroke::new(1.0, color)
}

pub fn tether_stroke(color: Rgb) -> Stroke {
    Stroke::new(1.0, area_color(color).gamma_multiply(0.4))
}

fn selection_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(0, 212, 255)
    } else {
        Color32::from_rgb(0, 150, 200)
    }
}

fn held_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(255, 200, 0)
    } else {
        Color32::from_rgb(210, 150, 0)
    }
}

fn label_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_gray(235)
    } else {
        Color32::from_gray(20)
    }
}
