pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zipmap")]
#[command(about = "Postal-code address lookup with a geocoded map marker")]
pub struct CliConfig {
    #[arg(long, default_value = "https://zipcloud.ibsnet.co.jp/api/search")]
    pub lookup_endpoint: String,

    #[arg(long, default_value = "https://nominatim.openstreetmap.org/search")]
    pub geocode_endpoint: String,

    /// Quiet window before a displayed address is geocoded, in ms
    #[arg(long, default_value = "250")]
    pub debounce_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn lookup_endpoint(&self) -> &str {
        &self.lookup_endpoint
    }

    fn geocode_endpoint(&self) -> &str {
        &self.geocode_endpoint
    }

    fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("lookup_endpoint", &self.lookup_endpoint)?;
        validation::validate_url("geocode_endpoint", &self.geocode_endpoint)?;
        validation::validate_range("debounce_ms", self.debounce_ms, 0, 10_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::try_parse_from(["zipmap"]).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let config =
            CliConfig::try_parse_from(["zipmap", "--lookup-endpoint", "not a url"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_excessive_debounce() {
        let config = CliConfig::try_parse_from(["zipmap", "--debounce-ms", "60000"]).unwrap();
        assert!(config.validate().is_err());
    }
}
