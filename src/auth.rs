//! LMv1 request signing for the LogicMonitor REST API.
//!
//! LogicMonitor's API-token scheme signs every request individually instead
//! of issuing bearer tokens. The signature input is the concatenation of
//! the HTTP method, the current epoch time in milliseconds, the exact
//! request body bytes, and the resource path (query string excluded):
//!
//! ```text
//! signature = base64( lowercase_hex( HMAC-SHA256(access_key, METHOD + epoch + body + path) ) )
//! Authorization: LMv1 <access_id>:<signature>:<epoch>
//! ```
//!
//! Note the double encoding: the HMAC digest is first rendered as a
//! lowercase hex string and that *string* is then base64-encoded. This is
//! what the platform expects, not base64 of the raw digest.
//!
//! Because the body participates in the signature, callers must sign the
//! exact serialized bytes they send — [`crate::client::LmClient`]
//! serializes the JSON body once and uses the same string for both.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with a LogicMonitor API token (access id + access key).
///
/// Stateless apart from the key material: there is nothing to cache or
/// refresh, every request gets a fresh timestamp and signature.
pub struct RequestSigner {
    access_id: String,
    access_key: String,
}

impl RequestSigner {
    /// Creates a signer for the given API token.
    pub fn new(access_id: &str, access_key: &str) -> Self {
        RequestSigner {
            access_id: access_id.to_string(),
            access_key: access_key.to_string(),
        }
    }

    /// Builds the `Authorization` header value for a request.
    ///
    /// `resource_path` is the path relative to the REST root, with a
    /// leading slash and without the query string (e.g. `/debug`).
    /// `body` is the exact serialized request body, or `""` for GET.
    pub fn authorization(&self, method: &str, resource_path: &str, body: &str) -> String {
        self.authorization_at(method, resource_path, body, epoch_millis())
    }

    /// Same as [`authorization`](Self::authorization) with an explicit
    /// timestamp, so tests can assert against known-answer vectors.
    pub fn authorization_at(
        &self,
        method: &str,
        resource_path: &str,
        body: &str,
        epoch_millis: u128,
    ) -> String {
        let input = format!("{method}{epoch_millis}{body}{resource_path}");
        let mut mac = HmacSha256::new_from_slice(self.access_key.as_bytes())
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(input.as_bytes());
        let digest_hex = hex::encode(mac.finalize().into_bytes());
        let signature = base64::engine::general_purpose::STANDARD.encode(digest_hex);
        format!("LMv1 {}:{}:{}", self.access_id, signature, epoch_millis)
    }
}

/// Milliseconds since the Unix epoch, as required by the LMv1 scheme.
fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the Unix epoch")
        .as_millis()
}
