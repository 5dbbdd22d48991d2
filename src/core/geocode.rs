use crate::domain::model::{Address, GeoHit};
use crate::utils::error::Result;
use reqwest::Client;

/// Country qualifier appended to the full-address candidate.
const COUNTRY_QUALIFIER: &str = "日本";

/// Ordered geocoding candidates for a resolved address, most specific
/// first:
///
/// 1. full address plus the country qualifier,
/// 2. region + locality, falling back to the full address,
/// 3. the zip code, falling back to the full address.
///
/// Empty candidates are dropped; duplicates are not (a duplicate just
/// costs one extra call down the chain).
pub fn build_queries(zip: &str, address: &Address) -> Vec<String> {
    let region = address.region.as_deref().unwrap_or("");
    let locality = address.locality.as_deref().unwrap_or("");

    let full_addr = address.parts().join(" ");
    let qualified = if full_addr.is_empty() {
        String::new()
    } else {
        format!("{} {}", full_addr, COUNTRY_QUALIFIER)
    };

    let region_locality = [region, locality]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let second = if region_locality.is_empty() {
        full_addr.clone()
    } else {
        region_locality
    };
    let third = if zip.is_empty() {
        full_addr
    } else {
        zip.to_string()
    };

    [qualified, second, third]
        .into_iter()
        .filter(|query| !query.is_empty())
        .collect()
}

/// Client for the limit-1 geocoding API.
pub struct GeocodeClient {
    client: Client,
    endpoint: String,
}

impl GeocodeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Try each candidate in order and return the first hit. `Ok(None)`
    /// means every candidate came back empty; an empty candidate list asks
    /// the network nothing. A transport error aborts the remaining
    /// candidates.
    pub async fn resolve(&self, queries: &[String]) -> Result<Option<GeoHit>> {
        for query in queries {
            if let Some(hit) = self.query_one(query).await? {
                tracing::debug!("geocode hit for \"{}\"", query);
                return Ok(Some(hit));
            }
            tracing::debug!("no geocode result for \"{}\"", query);
        }
        Ok(None)
    }

    async fn query_one(&self, query: &str) -> Result<Option<GeoHit>> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "jsonv2"),
                ("countrycodes", "jp"),
                ("limit", "1"),
                ("q", query),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // The API answers some errors with a JSON object instead of the
        // result array; anything but an array counts as no hit.
        match serde_json::from_str::<serde_json::Value>(&body)? {
            serde_json::Value::Array(hits) => hits
                .into_iter()
                .next()
                .map(serde_json::from_value)
                .transpose()
                .map_err(Into::into),
            _ => Ok(None),
        }
    }
}
