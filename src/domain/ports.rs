use crate::domain::model::{Address, StatusLevel};
use std::time::Duration;

/// Opaque marker identity issued by a [`MapSurface`]. Only ever valid
/// against the surface that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// The address form: a postal-code input, four address outputs, a status
/// line, and a submit control, all addressed through one boundary.
pub trait FormSurface: Send + Sync {
    fn zip_input(&self) -> String;
    fn set_zip_input(&self, value: &str);

    /// Caret position in the postal-code input, in characters.
    fn caret(&self) -> usize;
    fn set_caret(&self, pos: usize);

    /// Overwrite the region/locality/sub-locality outputs and the derived
    /// full-address output from `address`.
    fn show_address(&self, address: &Address);
    fn clear_address(&self);

    fn set_status(&self, text: &str, level: StatusLevel);
    fn set_submit_enabled(&self, enabled: bool);
}

/// The map widget. Implementations wrap whatever mapping library the host
/// provides; a host without one reports unavailability from `create_map`
/// and the map features stay silently disabled.
pub trait MapSurface: Send + Sync {
    /// Construct the widget with a base tile layer. Returns `false` when
    /// the hosting element or the mapping library is unavailable.
    fn create_map(&self, center: (f64, f64), zoom: u8, tile_url: &str) -> bool;

    fn set_view(&self, lat: f64, lon: f64, zoom: u8);
    fn add_marker(&self, lat: f64, lon: f64) -> MarkerHandle;
    fn remove_marker(&self, handle: MarkerHandle);
    fn bind_popup(&self, handle: MarkerHandle, label: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn lookup_endpoint(&self) -> &str;
    fn geocode_endpoint(&self) -> &str;

    /// Quiet window between an address being displayed and the geocode
    /// request going out.
    fn debounce(&self) -> Duration;
}
