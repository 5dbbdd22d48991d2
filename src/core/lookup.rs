use crate::domain::model::Address;
use crate::utils::error::{Result, ZipmapError};
use reqwest::Client;
use serde::Deserialize;

/// Fallback message when the API reports no match without text of its own.
pub(crate) const MSG_NOT_FOUND: &str = "該当する住所が見つかりません。";

/// Payload-level success code; independent of the HTTP status.
const STATUS_OK: i64 = 200;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    results: Option<Vec<Address>>,
}

/// Client for the postal-code-to-address API.
pub struct AddressLookupClient {
    client: Client,
    endpoint: String,
}

impl AddressLookupClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Look up the address for a cleaned 7-digit postal code and return the
    /// first matching record. The caller validates the length; this only
    /// speaks the wire protocol.
    pub async fn lookup(&self, zip: &str) -> Result<Address> {
        tracing::debug!("address lookup for {} via {}", zip, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("zipcode", zip)])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        tracing::debug!("lookup payload status: {}", body.status);

        if body.status != STATUS_OK {
            return Err(ZipmapError::NotFound {
                message: body.message.unwrap_or_else(|| MSG_NOT_FOUND.to_string()),
            });
        }

        body.results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| ZipmapError::NotFound {
                message: MSG_NOT_FOUND.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_lookup_returns_first_result() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/search").query_param("zipcode", "1000001");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": 200,
                    "results": [
                        {"address1": "東京都", "address2": "千代田区", "address3": "千代田"},
                        {"address1": "東京都", "address2": "千代田区", "address3": "皇居外苑"}
                    ]
                }));
        });

        let client = AddressLookupClient::new(server.url("/api/search"));
        let address = client.lookup("1000001").await.unwrap();

        api_mock.assert();
        assert_eq!(address.region.as_deref(), Some("東京都"));
        assert_eq!(address.locality.as_deref(), Some("千代田区"));
        assert_eq!(address.sub_locality.as_deref(), Some("千代田"));
        assert_eq!(address.full(), "東京都千代田区千代田");
    }

    #[tokio::test]
    async fn test_lookup_payload_error_carries_api_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": 400,
                    "message": "パラメータ「郵便番号」の桁数が不正です。"
                }));
        });

        let client = AddressLookupClient::new(server.url("/api/search"));
        let err = client.lookup("0000000").await.unwrap_err();

        match err {
            ZipmapError::NotFound { message } => {
                assert_eq!(message, "パラメータ「郵便番号」の桁数が不正です。");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_empty_results_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/search");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": 200, "results": null}));
        });

        let client = AddressLookupClient::new(server.url("/api/search"));
        let err = client.lookup("9999999").await.unwrap_err();

        match err {
            ZipmapError::NotFound { message } => assert_eq!(message, MSG_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_http_failure_is_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/search");
            then.status(500);
        });

        let client = AddressLookupClient::new(server.url("/api/search"));
        let err = client.lookup("1000001").await.unwrap_err();

        assert!(matches!(err, ZipmapError::ApiError(_)));
    }
}
