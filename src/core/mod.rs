pub mod binder;
pub mod geocode;
pub mod lookup;
pub mod map;
pub mod zip;

pub use crate::domain::model::{Address, GeoHit, StatusLevel};
pub use crate::domain::ports::{ConfigProvider, FormSurface, MapSurface, MarkerHandle};
pub use crate::utils::error::Result;
