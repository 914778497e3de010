//! Zoom, grid and snapping for designer state.

use super::DesignerState;
use crate::geometry::snap_to_grid;

/// Multiplier used by zoom in/out steps
pub const ZOOM_STEP: f64 = 1.2;

impl DesignerState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured range. Returns the
    /// level actually applied.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.zoom = self.config.editor.zoom.clamp(zoom);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_zoom(self.zoom * ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_zoom(self.zoom / ZOOM_STEP)
    }

    pub fn reset_zoom(&mut self) -> f64 {
        self.set_zoom(self.config.editor.zoom.default)
    }

    /// Toggles grid visibility.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Snaps a coordinate to the configured grid.
    pub fn snap(&self, value: f64) -> f64 {
        snap_to_grid(value, self.config.editor.snap_grid_mm)
    }
}
