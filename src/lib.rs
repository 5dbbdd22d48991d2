#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{
    cli::{ConsoleForm, ConsoleMap},
    CliConfig,
};

pub use crate::core::{
    binder::FormBinder, geocode::GeocodeClient, lookup::AddressLookupClient, map::MapPresenter,
};
pub use crate::utils::error::{Result, ZipmapError};
