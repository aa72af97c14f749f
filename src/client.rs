//! Authenticated HTTP client for the LogicMonitor REST API.
//!
//! `LmClient` wraps a `reqwest::Client` and a [`RequestSigner`], providing
//! JSON request helpers (`get`, `post`) that attach the LMv1 signature and
//! the `X-Version` header to every call.
//!
//! Signing constraint: the LMv1 scheme signs the resource path (without
//! the query string) and the exact request body bytes, so `post` serializes
//! the body to a string once and hands that same string to both the signer
//! and the transport. Query parameters are appended to the URL but never
//! enter the signature input.

use crate::auth::RequestSigner;
use crate::credentials::Credentials;
use crate::error::{LmError, Result};
use reqwest::{Client, Method, header};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Connect timeout for the LogicMonitor API HTTP client.
/// Covers TCP + TLS handshake only.
const API_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout for API calls.
/// Covers the full round-trip including response body download. Debug
/// command submissions return quickly; the fetched output is plain text
/// bounded by the collector's console buffer, so 60 seconds is ample.
const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// REST API version requested via the `X-Version` header.
const API_VERSION: &str = "3";

/// Builds a `reqwest::Client` with explicit timeouts for API calls.
fn build_api_client() -> Client {
    Client::builder()
        .connect_timeout(API_CONNECT_TIMEOUT)
        .timeout(API_REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client for the LogicMonitor API")
}

/// Authenticated HTTP client for the LogicMonitor REST API.
///
/// Design decisions:
/// - One client per process invocation; there is no token cache because
///   LMv1 signs each request independently.
/// - `base_url` is stored as a `String` rather than derived on every call
///   so it can be overridden in tests (e.g. pointing at a wiremock server).
/// - No retries: a failed request surfaces immediately as [`LmError`].
pub struct LmClient {
    client: Client,
    base_url: String,
    signer: RequestSigner,
}

impl LmClient {
    /// Creates a client for the account named in `creds`, targeting
    /// `https://<account>.logicmonitor.com/santaba/rest`.
    pub fn new(creds: &Credentials) -> Self {
        let base_url = format!(
            "https://{}.logicmonitor.com/santaba/rest",
            creds.account_name
        );
        Self::with_base_url(creds, &base_url)
    }

    /// Constructor that accepts a custom base URL, used by tests to point
    /// at a local mock server instead of the real API. `base_url` should
    /// not end with a slash; resource paths start with one.
    pub fn with_base_url(creds: &Credentials, base_url: &str) -> Self {
        LmClient {
            client: build_api_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            signer: RequestSigner::new(&creds.access_id, &creds.access_key),
        }
    }

    /// Core HTTP method: sends a signed request and deserializes the JSON
    /// response. The verb-specific methods (`get`, `post`) delegate here.
    ///
    /// `path` is the resource path with a leading slash (e.g. `/debug`);
    /// it is what gets signed. `query` pairs are appended to the URL only.
    /// `body` is the pre-serialized JSON body, `None` for GET.
    ///
    /// The response body is read as text before the status check so that
    /// non-success responses surface LogicMonitor's diagnostic payload in
    /// [`LmError::Api`] instead of discarding it.
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let authorization =
            self.signer
                .authorization(method.as_str(), path, body.as_deref().unwrap_or(""));

        let mut req = self
            .client
            .request(method, &url)
            .query(query)
            .header(header::AUTHORIZATION, authorization)
            .header("X-Version", API_VERSION);
        if let Some(payload) = body {
            req = req
                .header(header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(LmError::Api { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Sends a signed GET request and deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.send_json(Method::GET, path, query, None).await
    }

    /// Sends a signed POST request with a JSON body and deserializes the
    /// response.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_string(body)?;
        self.send_json(Method::POST, path, query, Some(payload)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            account_name: "acme".to_string(),
            access_id: "id".to_string(),
            access_key: "key".to_string(),
        }
    }

    #[test]
    fn default_base_url_targets_the_account_subdomain() {
        let client = LmClient::new(&creds());
        assert_eq!(client.base_url, "https://acme.logicmonitor.com/santaba/rest");
    }

    #[test]
    fn custom_base_url_trailing_slash_is_trimmed() {
        // Resource paths carry the leading slash, so a trailing slash on
        // the base would produce `//debug` in the URL.
        let client = LmClient::with_base_url(&creds(), "http://127.0.0.1:9999/");
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }
}
