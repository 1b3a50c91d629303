//! Main application state and rendering logic.

use std::time::Duration;

use eframe::{App, CreationContext};
use egui::{CollapsingHeader, Context, Sense};

use life_orbit_core::sample::sample_catalog;
use life_orbit_core::Catalog;
use life_orbit_engine::{
    EngineTuning, FrameSnapshot, OrbitEngine, SimulationConfig, MAX_ORBIT_SPEED,
    RADIUS_SCALE_RANGE,
};

use crate::details::detail_for;
use crate::render::{
    area_color, orbit_ring_stroke, resolve_node_visuals, satellite_radius, tether_stroke,
    NodeRenderContext,
};
use crate::settings::{SettingsStyle, SettingsView};
use crate::ui::{draw_detail_panel, draw_paused_indicator, draw_sidebar_toggle, DetailAction};
use crate::view::ViewTransform;

/// Extent used when the catalog is empty.
const EMPTY_EXTENT: f32 = 300.0;

/// The main visualization application.
pub struct LifeOrbitApp {
    /// The simulation; the app is its only owner.
    engine: OrbitEngine,
    settings_style: SettingsStyle,
    settings_view: SettingsView,
    show_sidebar: bool,
    dark_mode: bool,
    /// Transform used for the last painted frame.
    view: ViewTransform,
    /// Where the catalog came from, for the info section.
    catalog_source: String,
}

impl LifeOrbitApp {
    /// Create a new app from embedded data or the sample catalog.
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let (catalog, source) = Self::load_or_sample();
        Self::from_catalog(cc, catalog, source)
    }

    /// Create the app around an explicit catalog.
    pub fn from_catalog(
        cc: &CreationContext<'_>,
        catalog: Catalog,
        source: impl Into<String>,
    ) -> Self {
        let engine = OrbitEngine::new(
            catalog,
            SimulationConfig::default(),
            EngineTuning::default(),
        );
        Self {
            engine,
            settings_style: SettingsStyle::default(),
            settings_view: SettingsView::default(),
            show_sidebar: true,
            dark_mode: cc.egui_ctx.style().visuals.dark_mode,
            view: ViewTransform::default(),
            catalog_source: source.into(),
        }
    }

    fn load_or_sample() -> (Catalog, String) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(catalog) = Self::try_load_from_window() {
                return (catalog, "embedded".to_string());
            }
        }
        (sample_catalog(), "sample".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn try_load_from_window() -> Option<Catalog> {
        let window = web_sys::window()?;
        let data = js_sys::Reflect::get(&window, &"LIFE_ORBIT_DATA".into()).ok()?;
        let json_str = data.as_string()?;
        match Catalog::from_json_str(&json_str) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                tracing::warn!(%err, "ignoring embedded catalog");
                None
            }
        }
    }

    /// Radius of the layout at scale 1, so the radius slider visibly
    /// grows and shrinks the orbits instead of being fitted away.
    fn layout_extent(&self) -> f32 {
        let satellite = self.engine.tuning().satellite_radius;
        let extent = self
            .engine
            .nodes()
            .iter()
            .map(|area| area.orbit.radius + area.footprint_radius + satellite)
            .fold(0.0_f32, f32::max);
        if extent > 0.0 {
            extent
        } else {
            EMPTY_EXTENT
        }
    }
}

// =============================================================================
// Sidebar Panel UI
// =============================================================================

impl LifeOrbitApp {
    fn info_icon(ui: &mut egui::Ui, tip: &str) {
        ui.add_space(4.0);
        ui.small_button("ℹ").on_hover_text(tip);
    }

    fn ui_simulation(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Simulation")
            .default_open(true)
            .show(ui, |ui| {
                let config = self.engine.config();

                let mut paused = config.paused;
                ui.horizontal(|ui| {
                    if ui.checkbox(&mut paused, "paused").changed() {
                        self.engine.set_paused(paused);
                    }
                    Self::info_icon(ui, "Stop orbiting and collisions (Space). Dragging still works.");
                });

                let mut speed = config.orbit_speed;
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Slider::new(&mut speed, 0.0..=MAX_ORBIT_SPEED)
                                .text("orbit speed")
                                .logarithmic(true),
                        )
                        .changed()
                    {
                        self.engine.set_orbit_speed(speed);
                    }
                });

                let mut scale = config.radius_scale;
                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Slider::new(
                                &mut scale,
                                RADIUS_SCALE_RANGE.0..=RADIUS_SCALE_RANGE.1,
                            )
                            .text("radius scale"),
                        )
                        .changed()
                    {
                        self.engine.set_radius_scale(scale);
                    }
                });

                ui.horizontal(|ui| {
                    if ui.button("⟲ Reset").clicked() {
                        self.engine.reset();
                    }
                    Self::info_icon(ui, "Snap every area back onto its orbit (R)");
                });
            });
    }

    fn ui_style(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Style").show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut dark = ui.ctx().style().visuals.dark_mode;
                if ui.checkbox(&mut dark, "dark mode").changed() {
                    if dark {
                        ui.ctx().set_visuals(egui::Visuals::dark());
                    } else {
                        ui.ctx().set_visuals(egui::Visuals::light());
                    }
                    self.dark_mode = dark;
                }
            });

            ui.checkbox(&mut self.settings_style.show_orbits, "Orbit rings");
            ui.checkbox(&mut self.settings_style.show_targets, "Orbit targets");
            ui.checkbox(&mut self.settings_style.show_labels, "Labels");
            ui.checkbox(&mut self.settings_style.show_satellites, "Satellites");
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.settings_style.energy_halos, "Energy halos");
                Self::info_icon(ui, "Glow scaled by each area's energy");
            });

            ui.add(
                egui::Slider::new(&mut self.settings_view.padding, 0.0..=0.5).text("padding"),
            );
        });
    }

    fn ui_info(&self, ui: &mut egui::Ui, snapshot: &FrameSnapshot) {
        CollapsingHeader::new("Info")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(format!("Catalog: {}", self.catalog_source));
                ui.label(format!("Areas: {}", snapshot.nodes.len()));
                ui.label(format!("Satellites: {}", snapshot.satellites.len()));
                ui.label(format!("Tick: {}", snapshot.tick));
                ui.label(format!("Phase: {:.2} rad", snapshot.global_angle));
                if let Some(held) = snapshot.held.and_then(|id| snapshot.node(id)) {
                    ui.label(
                        egui::RichText::new(format!("Holding {}", held.label))
                            .color(egui::Color32::from_rgb(255, 200, 0)),
                    );
                }
            });
    }

    fn ui_areas(&mut self, ui: &mut egui::Ui, snapshot: &FrameSnapshot) {
        CollapsingHeader::new("Areas")
            .default_open(true)
            .show(ui, |ui| {
                for node in &snapshot.nodes {
                    let text = egui::RichText::new(format!("● {}", node.label))
                        .color(area_color(node.color));
                    if ui.selectable_label(node.selected, text).clicked() {
                        self.engine.toggle_selection(node.id);
                    }
                }
                if snapshot.nodes.is_empty() {
                    ui.label(
                        egui::RichText::new("Catalog is empty")
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                }
            });
    }
}

// =============================================================================
// Canvas
// =============================================================================

impl LifeOrbitApp {
    /// Map this frame's pointer state onto engine operations.
    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let pointer = ui.input(|i| i.pointer.clone());
        let held = self.engine.interaction().held.is_some();

        let Some(pos) = pointer.hover_pos() else {
            if held {
                self.engine.pointer_leave();
            }
            return;
        };
        let point = self.view.to_engine(pos);

        if pointer.primary_pressed() && response.hovered() {
            self.engine.pointer_down(point);
        } else if pointer.primary_down() && held {
            self.engine.pointer_move(point);
        }

        if pointer.primary_released() && self.engine.interaction().held.is_some() {
            self.engine.pointer_up(point);
        }

        if self.engine.interaction().held.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if self.engine.pick(point).is_some() && response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    fn paint(&self, painter: &egui::Painter, snapshot: &FrameSnapshot, time: f64) {
        let view = self.view;
        let style = &self.settings_style;
        let scale = self.engine.config().radius_scale;

        if style.show_orbits {
            let origin = view.to_screen(self.engine.tuning().center);
            let mut radii: Vec<f32> = self
                .engine
                .nodes()
                .iter()
                .map(|a| a.orbit.radius * scale)
                .collect();
            radii.sort_by(f32::total_cmp);
            radii.dedup_by(|a, b| (*a - *b).abs() < 0.5);
            for radius in radii {
                painter.circle_stroke(origin, view.scale(radius), orbit_ring_stroke(self.dark_mode));
            }
        }

        if style.show_targets {
            for node in &snapshot.nodes {
                painter.circle_stroke(
                    view.to_screen(node.target),
                    3.0,
                    egui::Stroke::new(1.0, area_color(node.color).gamma_multiply(0.6)),
                );
            }
        }

        if style.show_satellites {
            let radius = satellite_radius(view.zoom);
            for satellite in &snapshot.satellites {
                let Some(parent) = snapshot.node(satellite.parent) else {
                    continue;
                };
                let at = view.to_screen(satellite.position);
                painter.line_segment(
                    [view.to_screen(parent.position), at],
                    tether_stroke(parent.color),
                );
                painter.circle_filled(at, radius, area_color(parent.color).gamma_multiply(0.85));
                if style.show_labels && parent.selected {
                    painter.text(
                        at + egui::vec2(0.0, radius + 2.0),
                        egui::Align2::CENTER_TOP,
                        &satellite.label,
                        egui::FontId::proportional(10.0),
                        egui::Color32::GRAY,
                    );
                }
            }
        }

        // Held node last so it draws over whatever it is pushing.
        let mut order: Vec<_> = snapshot.nodes.iter().collect();
        order.sort_by_key(|n| n.held);

        for node in order {
            let visuals = resolve_node_visuals(NodeRenderContext {
                dark_mode: self.dark_mode,
                zoom: view.zoom,
                footprint_radius: node.footprint_radius,
                color: node.color,
                energy: node.energy,
                held: node.held,
                selected: node.selected,
                energy_halos: style.energy_halos,
                time,
            });
            let center = view.to_screen(node.position);

            if let Some(halo) = visuals.halo {
                painter.circle_filled(center, halo, visuals.fill.gamma_multiply(0.18));
            }
            painter.circle(center, visuals.radius, visuals.fill, visuals.stroke);

            if style.show_labels {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    &node.label,
                    egui::FontId::proportional((visuals.radius * 0.35).clamp(9.0, 16.0)),
                    visuals.label_color,
                );
            }
        }
    }
}

// =============================================================================
// Main Update Loop
// =============================================================================

impl App for LifeOrbitApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        let elapsed = Duration::try_from_secs_f32(dt).unwrap_or_default();
        self.engine.advance(elapsed);

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Tab) {
                self.show_sidebar = !self.show_sidebar;
            }
            if i.key_pressed(egui::Key::Space) {
                self.engine.toggle_paused();
            }
            if i.key_pressed(egui::Key::R) {
                self.engine.reset();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.engine.clear_selection();
            }
        });

        let snapshot = self.engine.snapshot();

        // Right sidebar with controls
        if self.show_sidebar {
            egui::SidePanel::right("right_panel")
                .default_width(260.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.heading("Life Orbit");
                        ui.separator();

                        self.ui_simulation(ui);
                        ui.separator();

                        self.ui_areas(ui, &snapshot);
                        ui.separator();

                        self.ui_info(ui, &snapshot);
                        ui.separator();

                        self.ui_style(ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            self.view = ViewTransform::fit(
                response.rect,
                self.engine.tuning().center,
                self.layout_extent(),
                self.settings_view.padding,
            );

            self.handle_pointer(ui, &response);

            // Paint what the pointer just did rather than last frame's state.
            let snapshot = self.engine.snapshot();
            let time = ui.input(|i| i.time);
            self.paint(&painter, &snapshot, time);

            if let Some(id) = snapshot.selected {
                if let Some(area) = self.engine.node(id) {
                    let action = draw_detail_panel(ui, area, detail_for(id), self.dark_mode);
                    if action == DetailAction::Close {
                        self.engine.clear_selection();
                    }
                }
            }

            draw_paused_indicator(ui, snapshot.paused);
            draw_sidebar_toggle(ui, &mut self.show_sidebar);
        });

        let animating = !self.engine.config().paused
            || self.engine.interaction().held.is_some()
            || self.settings_style.energy_halos;
        if animating {
            ctx.request_repaint_after(self.engine.tick_interval());
        }
    }
}
