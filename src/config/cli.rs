use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::model::{Address, StatusLevel};
use crate::domain::ports::{FormSurface, MapSurface, MarkerHandle};

/// Form surface for the terminal demo: field state lives in memory and
/// every user-visible change is echoed to stdout.
#[derive(Clone, Default)]
pub struct ConsoleForm {
    state: Arc<Mutex<FormState>>,
}

struct FormState {
    zip_value: String,
    caret: usize,
    submit_enabled: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            zip_value: String::new(),
            caret: 0,
            submit_enabled: true,
        }
    }
}

impl ConsoleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_enabled(&self) -> bool {
        self.state.lock().expect("form state poisoned").submit_enabled
    }
}

impl FormSurface for ConsoleForm {
    fn zip_input(&self) -> String {
        self.state.lock().expect("form state poisoned").zip_value.clone()
    }

    fn set_zip_input(&self, value: &str) {
        self.state.lock().expect("form state poisoned").zip_value = value.to_string();
    }

    fn caret(&self) -> usize {
        self.state.lock().expect("form state poisoned").caret
    }

    fn set_caret(&self, pos: usize) {
        self.state.lock().expect("form state poisoned").caret = pos;
    }

    fn show_address(&self, address: &Address) {
        println!("  都道府県: {}", address.region.as_deref().unwrap_or(""));
        println!("  市区町村: {}", address.locality.as_deref().unwrap_or(""));
        println!("  町域    : {}", address.sub_locality.as_deref().unwrap_or(""));
        println!("  住所    : {}", address.full());
    }

    fn clear_address(&self) {}

    fn set_status(&self, text: &str, level: StatusLevel) {
        if text.is_empty() {
            return;
        }
        match level {
            StatusLevel::Ok => println!("✅ {}", text),
            StatusLevel::Err => println!("❌ {}", text),
            StatusLevel::Neutral => println!("   {}", text),
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state.lock().expect("form state poisoned").submit_enabled = enabled;
    }
}

/// Map surface for the terminal demo: there is no widget, so widget calls
/// become log lines and marker handles are just a counter.
#[derive(Default)]
pub struct ConsoleMap {
    next_marker: AtomicU64,
}

impl ConsoleMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for ConsoleMap {
    fn create_map(&self, center: (f64, f64), zoom: u8, _tile_url: &str) -> bool {
        tracing::info!("map ready at ({}, {}) zoom {}", center.0, center.1, zoom);
        true
    }

    fn set_view(&self, lat: f64, lon: f64, zoom: u8) {
        tracing::info!("map view -> ({}, {}) zoom {}", lat, lon, zoom);
    }

    fn add_marker(&self, lat: f64, lon: f64) -> MarkerHandle {
        let handle = MarkerHandle(self.next_marker.fetch_add(1, Ordering::Relaxed));
        tracing::info!("marker #{} at ({}, {})", handle.0, lat, lon);
        handle
    }

    fn remove_marker(&self, handle: MarkerHandle) {
        tracing::info!("marker #{} removed", handle.0);
    }

    fn bind_popup(&self, _handle: MarkerHandle, label: &str) {
        println!("📍 {}", label);
    }
}
