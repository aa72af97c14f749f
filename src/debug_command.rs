//! Debug-command request types and orchestration for the LogicMonitor API.
//!
//! Running a script on a collector is a 2-step flow:
//! 1. POST `/debug?collectorId=N` with `{"cmdline": "!groovy \n ..."}` —
//!    the collector starts executing and the API returns a session id.
//! 2. GET `/debug/{sessionId}?collectorId=N` — returns the textual output
//!    captured so far.
//!
//! The session id is used exactly once: one submission, one fetch, output
//! returned verbatim. There is no polling loop and no retry; a failure at
//! either step aborts the whole run.

use serde::{Deserialize, Serialize};

use crate::client::LmClient;
use crate::error::Result;

// ── Request types ──────────────────────────────────────────────────────

/// Body for the debug submission endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DebugCommandRequest {
    /// The full debug-console command line, including the `!<interpreter>`
    /// prefix (see [`crate::script::build_cmdline`]).
    pub cmdline: String,
}

// ── Response types ─────────────────────────────────────────────────────

/// Submission response: the session handle for the started execution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSession {
    /// Opaque numeric session id, valid for one result fetch.
    pub session_id: u64,
}

/// Result-fetch response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugCommandResult {
    /// The collector console output, verbatim. The API omits the field
    /// while output is not yet available, which maps to an empty string.
    #[serde(default)]
    pub output: String,
}

// ── Orchestration ──────────────────────────────────────────────────────

/// Submits a command line to a collector and returns the session id.
pub async fn submit(client: &LmClient, collector_id: i64, cmdline: &str) -> Result<u64> {
    let body = DebugCommandRequest {
        cmdline: cmdline.to_string(),
    };
    let session: DebugSession = client
        .post("/debug", &[("collectorId", collector_id.to_string())], &body)
        .await?;
    Ok(session.session_id)
}

/// Fetches the output associated with a debug session.
pub async fn fetch_output(client: &LmClient, session_id: u64, collector_id: i64) -> Result<String> {
    let path = format!("/debug/{session_id}");
    let result: DebugCommandResult = client
        .get(&path, &[("collectorId", collector_id.to_string())])
        .await?;
    Ok(result.output)
}

/// Runs a debug command end-to-end: exactly one submission followed by
/// exactly one result fetch. The output is returned unmodified — no
/// post-processing, no truncation.
pub async fn run_debug_command(
    client: &LmClient,
    collector_id: i64,
    cmdline: &str,
) -> Result<String> {
    let session_id = submit(client, collector_id, cmdline).await?;
    fetch_output(client, session_id, collector_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_cmdline_key() {
        let req = DebugCommandRequest {
            cmdline: "!groovy \n println 1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["cmdline"], "!groovy \n println 1");
    }

    #[test]
    fn session_deserializes_from_api_response() {
        // The API returns the submitted cmdline and an empty output field
        // alongside the session id; only the id matters here.
        let json = r#"{
            "sessionId": 556677,
            "cmdline": "!groovy \n println 1",
            "output": ""
        }"#;
        let session: DebugSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_id, 556677);
    }

    #[test]
    fn result_deserializes_output_verbatim() {
        let json = r#"{"sessionId": 556677, "output": "line one\nline two\n"}"#;
        let result: DebugCommandResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.output, "line one\nline two\n");
    }

    #[test]
    fn missing_output_field_defaults_to_empty() {
        let json = r#"{"sessionId": 556677}"#;
        let result: DebugCommandResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.output, "");
    }
}
