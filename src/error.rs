//! Typed error hierarchy for the lmrun crate.
//!
//! `LmError` gives every failure boundary in the pipeline its own variant
//! so that the CLI can map errors to the right user-facing message and
//! exit behavior. In particular, a missing credential file must be
//! distinguishable from every other storage failure, because the two get
//! different messages at the process boundary.
//!
//! Design rationale:
//! - Variants map to real system boundaries, not internal implementation
//!   details. `Storage` covers the on-disk credential file; `Api` covers
//!   the LogicMonitor REST API; `Network` covers the transport; etc.
//! - `Api` preserves the raw response body rather than discarding it,
//!   because LogicMonitor error responses carry an `errorMessage` field
//!   that is essential for diagnosing auth and permission problems.
//! - `Parse` wraps `serde_json::Error` for deserialization failures, which
//!   can occur if the API returns an unexpected response shape.

use reqwest::StatusCode;
use std::path::PathBuf;

/// Unified error type for all lmrun library operations.
///
/// Each variant corresponds to a distinct failure boundary. `#[source]` /
/// `#[from]` attributes enable `Error::source()` chaining so callers can
/// traverse the full cause chain.
#[derive(Debug, thiserror::Error)]
pub enum LmError {
    /// The credential file does not exist. The CLI turns this into the
    /// "please login first" message with exit status 1.
    #[error("no stored credentials found")]
    MissingCredentials,

    /// The user's home directory could not be resolved, so there is no
    /// place to put (or look for) the credential file.
    #[error("could not determine the current user's home directory")]
    NoHomeDir,

    /// The credential file exists but could not be read or written.
    ///
    /// Deliberately separate from [`LmError::MissingCredentials`]: absence
    /// means "never logged in", while this variant means the file is there
    /// but something is wrong with it (permissions, I/O failure, a
    /// directory where a file was expected, ...).
    #[error("credential storage error: {source}")]
    Storage {
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Reading a `login` prompt response from the terminal failed.
    ///
    /// Kept apart from [`LmError::Storage`] so a broken stdin does not get
    /// reported as a credential-file problem.
    #[error("failed to read login input from the terminal: {source}")]
    Prompt {
        /// The underlying terminal I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The script file could not be read from disk.
    #[error("failed to read script {}: {source}", .path.display())]
    ScriptRead {
        /// The path that was passed to `run`.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The script's file extension maps to no known collector interpreter.
    ///
    /// Raised before any network call is attempted. Only `.groovy` and
    /// `.ps1` are accepted, case-sensitively.
    #[error("unsupported script type {extension:?}: input file must be .groovy or .ps1")]
    UnsupportedScriptType {
        /// The offending extension, including its leading dot, or
        /// `"(none)"` for extensionless paths.
        extension: String,
    },

    /// The LogicMonitor API returned a non-success HTTP status code.
    ///
    /// The full response body is preserved: LogicMonitor wraps its
    /// diagnostics in `{"errorMessage": ..., "errorCode": ...}` and that
    /// text is the only clue the user gets for bad credentials, unknown
    /// collector ids, and rate limiting.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the API.
        status: StatusCode,
        /// The raw response body text. May be an empty string if the body
        /// could not be read.
        body: String,
    },

    /// The account has no collectors, so there is nothing to pick from
    /// when `--collector_id` is omitted.
    #[error("no collectors are registered in this account")]
    NoCollectors,

    /// JSON deserialization failed when parsing an API response body or
    /// the stored credential file.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A transport-level failure (DNS resolution, TCP connection, TLS
    /// handshake, request timeout). No HTTP status code is available
    /// because the request did not complete.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, LmError>;
