//! UI components for the orbit visualization.
//!
//! This module contains rendering functions for overlays and widgets.

mod overlays;

pub use overlays::{draw_detail_panel, draw_paused_indicator, draw_sidebar_toggle, DetailAction};
