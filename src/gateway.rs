use crate::error::GatewayError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://connect.runalloy.com/connectors";

const API_VERSION: &str = "2025-09";
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload the gateway expects. `body` and `params` must be absent from the
/// JSON entirely when not supplied, not serialized as null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectivityRequest<'a> {
    connection_id: &'a str,
    method: String,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<HashMap<String, String>>,
}

/// Client for the Alloy Connectivity API. Every proxied request is a single
/// POST against the gateway base URL; the target API and verb travel in the
/// payload, not the request line.
pub struct ConnectivityClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ConnectivityClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    /// Proxies one request through the gateway and returns the parsed JSON
    /// response. The HTTP verb is normalized to lowercase before
    /// transmission. A non-2xx answer or a transport failure (including the
    /// 30s timeout) is an error; there are no retries.
    pub async fn call(
        &self,
        connection_id: &str,
        method: &str,
        path: &str,
        body: Option<Value>,
        params: Option<HashMap<String, String>>,
    ) -> Result<Value, GatewayError> {
        let payload = ConnectivityRequest {
            connection_id,
            method: method.to_lowercase(),
            path,
            body,
            params,
        };

        tracing::debug!(method = %payload.method, path, "gateway call");

        let resp = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .header("x-api-version", API_VERSION)
            .json(&payload)
            .timeout(CALL_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<Value>().await?)
    }
}
