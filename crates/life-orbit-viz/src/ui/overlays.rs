//! Overlay rendering for the detail card, pause indicator and sidebar toggle.

use life_orbit_core::LifeArea;

use crate::details::AreaDetail;
use crate::render::area_color;

/// What the user did with the detail card this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Close,
}

/// Draw the detail card for the selected area in the top-left corner.
pub fn draw_detail_panel(
    ui: &mut egui::Ui,
    area: &LifeArea,
    detail: AreaDetail,
    dark_mode: bool,
) -> DetailAction {
    let rect = ui.max_rect();
    let panel_pos = egui::pos2(rect.left() + 12.0, rect.top() + 12.0);
    let background = if dark_mode {
        egui::Color32::from_rgba_unmultiplied(20, 20, 28, 220)
    } else {
        egui::Color32::from_rgba_unmultiplied(250, 250, 252, 235)
    };

    let mut action = DetailAction::None;
    egui::Area::new(egui::Id::new("area_detail_panel"))
        .order(egui::Order::Foreground)
        .fixed_pos(panel_pos)
        .movable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(background)
                .stroke(egui::Stroke::new(1.0, area_color(area.color)))
                .corner_radius(6.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.set_max_width(260.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&area.label)
                                .color(area_color(area.color))
                                .strong()
                                .size(18.0),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").on_hover_text("Close").clicked() {
                                action = DetailAction::Close;
                            }
                        });
                    });
                    ui.label(detail.summary);

                    ui.add(
                        egui::ProgressBar::new(area.energy)
                            .desired_width(200.0)
                            .text(format!("energy {:.0}%", area.energy * 100.0)),
                    );

                    if !area.satellites.is_empty() {
                        ui.separator();
                        ui.label(egui::RichText::new("Around it").strong());
                        for satellite in &area.satellites {
                            ui.label(format!("• {}", satellite.label));
                        }
                    }

                    ui.separator();
                    for prompt in detail.prompts {
                        ui.label(
                            egui::RichText::new(*prompt)
                                .italics()
                                .color(egui::Color32::GRAY),
                        );
                    }
                });
        });
    action
}

/// Draw a small "paused" badge at the top-right of the canvas.
pub fn draw_paused_indicator(ui: &mut egui::Ui, paused: bool) {
    if !paused {
        return;
    }

    let rect = ui.max_rect();
    let indicator_pos = egui::pos2(rect.right() - 110.0, rect.top() + 10.0);

    egui::Area::new(egui::Id::new("paused_indicator"))
        .order(egui::Order::Foreground)
        .fixed_pos(indicator_pos)
        .movable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("⏸ PAUSED")
                            .color(egui::Color32::from_rgb(255, 200, 50))
                            .strong(),
                    );
                });
        });
}

/// Draw the sidebar toggle button in the bottom-right corner.
pub fn draw_sidebar_toggle(ui: &mut egui::Ui, show_sidebar: &mut bool) {
    let g_rect = ui.max_rect();
    let btn_size = egui::vec2(32.0, 32.0);
    let margin = 10.0;

    let toggle_pos = egui::pos2(
        g_rect.right() - margin - btn_size.x,
        g_rect.bottom() - margin - btn_size.y,
    );

    let (arrow, tip) = if *show_sidebar {
        ("▶", "Hide controls")
    } else {
        ("◀", "Show controls")
    };

    egui::Area::new(egui::Id::new("sidebar_toggle_btn"))
        .order(egui::Order::Foreground)
        .fixed_pos(toggle_pos)
        .movable(false)
        .show(ui.ctx(), |ui_area| {
            ui_area.set_clip_rect(g_rect);
            let arrow_text = egui::RichText::new(arrow).size(18.0);
            let response = ui_area.add_sized(btn_size, egui::Button::new(arrow_text));
            if response.on_hover_text(tip).clicked() {
                *show_sidebar = !*show_sidebar;
            }
        });
}
