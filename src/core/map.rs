use crate::domain::ports::{MapSurface, MarkerHandle};

/// Tokyo Station; where the map opens before any geocode has landed.
pub const DEFAULT_CENTER: (f64, f64) = (35.681236, 139.767125);
pub const DEFAULT_ZOOM: u8 = 12;
/// Zoom applied when recentering onto a resolved marker.
pub const MARKER_ZOOM: u8 = 16;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Owns the map widget lifecycle and the single marker slot.
pub struct MapPresenter<M: MapSurface> {
    surface: M,
    ready: bool,
    marker: Option<MarkerHandle>,
}

impl<M: MapSurface> MapPresenter<M> {
    pub fn new(surface: M) -> Self {
        Self {
            surface,
            ready: false,
            marker: None,
        }
    }

    /// Construct the widget on first success; a no-op once it exists.
    /// Returns whether a map is available. An unavailable surface is
    /// probed again on the next call.
    pub fn ensure_initialized(&mut self) -> bool {
        if !self.ready && self.surface.create_map(DEFAULT_CENTER, DEFAULT_ZOOM, TILE_URL) {
            self.ready = true;
        }
        self.ready
    }

    /// Remove the current marker, if any, and forget the handle.
    pub fn clear_marker(&mut self) {
        if let Some(handle) = self.marker.take() {
            self.surface.remove_marker(handle);
        }
    }

    /// Recenter onto the hit and replace the marker: the old one is
    /// removed before the new one is added, so the slot never holds two.
    pub fn place_marker(&mut self, lat: f64, lon: f64, label: &str) {
        if !self.ensure_initialized() {
            return;
        }
        self.surface.set_view(lat, lon, MARKER_ZOOM);
        self.clear_marker();
        let handle = self.surface.add_marker(lat, lon);
        self.surface.bind_popup(handle, label);
        self.marker = Some(handle);
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}
