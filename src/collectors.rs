//! Collector listing and random selection.
//!
//! Covers the `/setting/collector/collectors` endpoint family. When `run`
//! is invoked without an explicit `--collector_id`, a collector is chosen
//! uniformly at random from the account's list — no health filtering, no
//! caching; the debug call itself will fail if the chosen collector is
//! down.

use crate::client::LmClient;
use crate::error::{LmError, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;

// ── Response types ─────────────────────────────────────────────────────

/// A collector agent as returned by the LogicMonitor API.
///
/// Field names use camelCase to match the API contract. Only the fields
/// the CLI displays are modeled; the API returns many more, which serde
/// ignores by default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collector {
    /// Numeric collector id, the handle every debug call targets.
    pub id: i64,

    /// Free-form description set by the administrator.
    #[serde(default)]
    pub description: Option<String>,

    /// Hostname of the machine the collector runs on.
    #[serde(default)]
    pub hostname: Option<String>,

    /// Collector software version (e.g. `"37.100"`).
    #[serde(default)]
    pub build: Option<String>,

    /// Whether the platform currently considers the collector dead.
    #[serde(default)]
    pub is_down: bool,
}

/// Paged-list wrapper used by LogicMonitor collection endpoints:
/// `{ "total": N, "items": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CollectorList {
    /// The collectors on this page.
    pub items: Vec<Collector>,
    /// Total number of collectors in the account.
    #[serde(default)]
    pub total: i64,
}

// ── Endpoint functions ─────────────────────────────────────────────────

/// Retrieves the collectors registered in the account.
///
/// # Errors
///
/// - [`LmError::Api`] — non-success HTTP status (bad credentials,
///   insufficient API-token permissions).
/// - [`LmError::Network`] — transport-level failure.
/// - [`LmError::Parse`] — unexpected response shape.
pub async fn list_collectors(client: &LmClient) -> Result<Vec<Collector>> {
    let response: CollectorList = client.get("/setting/collector/collectors", &[]).await?;
    Ok(response.items)
}

/// Picks one collector id uniformly at random.
///
/// # Errors
///
/// [`LmError::NoCollectors`] when the slice is empty.
pub fn pick_random(collectors: &[Collector]) -> Result<i64> {
    collectors
        .choose(&mut rand::thread_rng())
        .map(|c| c.id)
        .ok_or(LmError::NoCollectors)
}

/// Lists the account's collectors and picks one at random.
pub async fn pick_random_collector(client: &LmClient) -> Result<i64> {
    let collectors = list_collectors(client).await?;
    pick_random(&collectors)
}
