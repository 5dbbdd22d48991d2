use serde::{Deserialize, Serialize};

/// One resolved postal address. Wire names follow the lookup API:
/// `address1` = prefecture, `address2` = city, `address3` = town.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "address1", default)]
    pub region: Option<String>,
    #[serde(rename = "address2", default)]
    pub locality: Option<String>,
    #[serde(rename = "address3", default)]
    pub sub_locality: Option<String>,
}

impl Address {
    /// The non-empty components, in order.
    pub(crate) fn parts(&self) -> Vec<&str> {
        [&self.region, &self.locality, &self.sub_locality]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Concatenation of the non-empty components, no separator.
    pub fn full(&self) -> String {
        self.parts().concat()
    }
}

/// A single geocoding hit. The API serializes coordinates as decimal
/// strings, so parsing stays on this side.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeoHit {
    /// Parsed coordinates; `None` when either side fails to parse or is
    /// not finite.
    pub fn coords(&self) -> Option<(f64, f64)> {
        let lat: f64 = self.lat.trim().parse().ok()?;
        let lon: f64 = self.lon.trim().parse().ok()?;
        (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
    }
}

/// Severity tag on the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusLevel {
    #[default]
    Neutral,
    Ok,
    Err,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(region: &str, locality: &str, sub_locality: &str) -> Address {
        Address {
            region: (!region.is_empty()).then(|| region.to_string()),
            locality: (!locality.is_empty()).then(|| locality.to_string()),
            sub_locality: (!sub_locality.is_empty()).then(|| sub_locality.to_string()),
        }
    }

    #[test]
    fn test_full_concatenates_in_order() {
        let addr = address("東京都", "千代田区", "千代田");
        assert_eq!(addr.full(), "東京都千代田区千代田");
    }

    #[test]
    fn test_full_skips_missing_parts() {
        assert_eq!(address("東京都", "", "千代田").full(), "東京都千代田");
        assert_eq!(Address::default().full(), "");
    }

    #[test]
    fn test_address_wire_names() {
        let addr: Address = serde_json::from_str(
            r#"{"address1":"東京都","address2":"千代田区","address3":"千代田","zipcode":"1000001"}"#,
        )
        .unwrap();
        assert_eq!(addr, address("東京都", "千代田区", "千代田"));
    }

    #[test]
    fn test_coords_parses_finite_pairs() {
        let hit = GeoHit {
            lat: "35.681236".to_string(),
            lon: "139.767125".to_string(),
            display_name: None,
        };
        assert_eq!(hit.coords(), Some((35.681236, 139.767125)));
    }

    #[test]
    fn test_coords_rejects_garbage_and_non_finite() {
        let mut hit = GeoHit {
            lat: "not-a-number".to_string(),
            lon: "139.0".to_string(),
            display_name: None,
        };
        assert_eq!(hit.coords(), None);

        hit.lat = "inf".to_string();
        assert_eq!(hit.coords(), None);

        hit.lat = "NaN".to_string();
        assert_eq!(hit.coords(), None);
    }
}
