//! Settings structures for the visualization UI.

/// Visual style toggles.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Draw the orbit ring each area is pulled toward.
    pub show_orbits: bool,
    /// Draw a faint marker at each node's current target.
    pub show_targets: bool,
    pub show_labels: bool,
    pub show_satellites: bool,
    /// Pulse the halo of high-energy areas.
    pub energy_halos: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_targets: false,
            show_labels: true,
            show_satellites: true,
            energy_halos: true,
        }
    }
}

/// Viewport parameters.
#[derive(Debug, Clone)]
pub struct SettingsView {
    /// Fraction of the canvas half-size left free around the outermost orbit.
    pub padding: f32,
}

impl Default for SettingsView {
    fn default() -> Self {
        Self { padding: 0.08 }
    }
}
