use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::core::geocode::{build_queries, GeocodeClient};
use crate::core::lookup::AddressLookupClient;
use crate::core::map::MapPresenter;
use crate::core::zip::{self, ZIP_LEN};
use crate::domain::model::{Address, StatusLevel};
use crate::domain::ports::{ConfigProvider, FormSurface, MapSurface};
use crate::utils::error::{Result, ZipmapError};

const MSG_SEARCHING: &str = "検索中です…";
const MSG_FOUND: &str = "住所を取得しました。";

/// Wires form events to the address lookup, the field updates, and the
/// debounced geocode pass. The handlers are plain methods; an external
/// event dispatcher (the demo binary, tests) decides when they fire.
pub struct FormBinder<F, M>
where
    F: FormSurface + 'static,
    M: MapSurface + 'static,
{
    form: Arc<F>,
    lookup: AddressLookupClient,
    geocode: Arc<GeocodeClient>,
    map: Arc<Mutex<MapPresenter<M>>>,
    debounce: Duration,
    /// Single pending-geocode slot; rescheduling aborts the occupant.
    geocode_slot: Mutex<Option<JoinHandle<()>>>,
}

impl<F, M> FormBinder<F, M>
where
    F: FormSurface + 'static,
    M: MapSurface + 'static,
{
    pub fn new(form: F, surface: M, http: reqwest::Client, config: &impl ConfigProvider) -> Self {
        Self {
            form: Arc::new(form),
            lookup: AddressLookupClient::with_client(http.clone(), config.lookup_endpoint()),
            geocode: Arc::new(GeocodeClient::with_client(http, config.geocode_endpoint())),
            map: Arc::new(Mutex::new(MapPresenter::new(surface))),
            debounce: config.debounce(),
            geocode_slot: Mutex::new(None),
        }
    }

    /// Eagerly construct the map widget, as on page load. Safe to skip:
    /// the geocode pass ensures it lazily anyway.
    pub async fn init_map(&self) -> bool {
        self.map.lock().await.ensure_initialized()
    }

    /// Input-change handler: reformat the field, keep the caret close,
    /// then either look up (exactly 7 digits) or clear (fewer).
    pub async fn on_input(&self) {
        let before = self.form.zip_input();
        let caret = self.form.caret();

        let digits = zip::clean(&before);
        let formatted = zip::format_for_display(&before);
        let delta = formatted.chars().count() as i64 - before.chars().count() as i64;
        self.form.set_zip_input(&formatted);
        self.form.set_caret((caret as i64 + delta).max(0) as usize);

        self.form.set_status("", StatusLevel::Neutral);
        if digits.len() == ZIP_LEN {
            self.search(&digits).await;
        } else {
            self.clear_address().await;
        }
    }

    /// Submit handler: search with whatever is in the field. `search`
    /// reports the length error itself, so no pre-check here.
    pub async fn on_submit(&self) {
        let digits = zip::clean(&self.form.zip_input());
        self.search(&digits).await;
    }

    pub async fn search(&self, zip: &str) {
        if zip.len() != ZIP_LEN {
            let err = ZipmapError::InvalidLength { len: zip.len() };
            self.form.set_status(&err.user_message(), StatusLevel::Err);
            return;
        }

        self.form.set_status(MSG_SEARCHING, StatusLevel::Neutral);
        self.form.set_submit_enabled(false);
        let outcome = self.lookup.lookup(zip).await;
        // Unconditional: the control comes back whatever the lookup did.
        self.form.set_submit_enabled(true);

        match outcome {
            Ok(address) => {
                self.form.show_address(&address);
                self.form.set_status(MSG_FOUND, StatusLevel::Ok);
                self.schedule_geocode(zip.to_string(), address).await;
            }
            Err(err) => {
                self.clear_address().await;
                self.form.set_status(&err.user_message(), StatusLevel::Err);
                if !matches!(err, ZipmapError::NotFound { .. }) {
                    tracing::error!("address lookup failed: {}", err);
                }
            }
        }
    }

    async fn clear_address(&self) {
        self.form.clear_address();
        self.map.lock().await.clear_marker();
    }

    /// Reset the pending-geocode slot: the previously scheduled pass is
    /// aborted, the new one fires after the debounce interval with the
    /// arguments captured here.
    async fn schedule_geocode(&self, zip: String, address: Address) {
        let form = Arc::clone(&self.form);
        let geocode = Arc::clone(&self.geocode);
        let map = Arc::clone(&self.map);
        let debounce = self.debounce;

        let task = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Err(err) = Self::geocode_pass(form, geocode, map, zip, address).await {
                tracing::warn!("geocode pass failed: {}", err);
            }
        });

        let mut slot = self.geocode_slot.lock().await;
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    /// Wait for a scheduled geocode pass to finish. Lets a shutdown (or a
    /// test) observe the debounced work instead of racing it.
    pub async fn flush_geocode(&self) {
        let task = self.geocode_slot.lock().await.take();
        if let Some(task) = task {
            let _ = task.await;
        }
    }

    /// The debounced pass. Failures here never reach the input handlers,
    /// and the address fields already on screen are never touched.
    async fn geocode_pass(
        form: Arc<F>,
        geocode: Arc<GeocodeClient>,
        map: Arc<Mutex<MapPresenter<M>>>,
        zip: String,
        address: Address,
    ) -> Result<()> {
        let queries = build_queries(&zip, &address);
        {
            let mut presenter = map.lock().await;
            if queries.is_empty() || !presenter.ensure_initialized() {
                return Ok(());
            }
        }

        match geocode.resolve(&queries).await? {
            Some(hit) => {
                if let Some((lat, lon)) = hit.coords() {
                    let label = hit.display_name.unwrap_or_else(|| queries[0].clone());
                    map.lock().await.place_marker(lat, lon, &label);
                }
            }
            None => {
                // The address itself was found; only the pin is missing, so
                // the message stays subdued and the fields stay put.
                form.set_status(
                    &ZipmapError::GeocodeNotFound.user_message(),
                    StatusLevel::Err,
                );
                map.lock().await.clear_marker();
            }
        }
        Ok(())
    }
}
