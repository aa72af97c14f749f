//! Client library for running local scripts on LogicMonitor collectors.
//!
//! Wraps the LogicMonitor REST API's debug-command facility: a local
//! `.groovy` or `.ps1` file is wrapped in the collector debug console's
//! `!groovy` / `!posh` command-line convention, submitted to a collector,
//! and the textual output of the execution is fetched back.
//!
//! # Modules
//!
//! - [`auth`] — LMv1 HMAC-SHA256 request signing.
//! - [`client`] — Authenticated HTTP wrapper for the LogicMonitor REST API.
//! - [`collectors`] — Collector listing and random selection.
//! - [`credentials`] — On-disk credential store (`~/.lmrun/config.json`).
//! - [`debug_command`] — Submit/fetch types and end-to-end orchestration.
//! - [`error`] — Typed error hierarchy (`LmError`) for all library operations.
//! - [`script`] — Script file loading and interpreter mapping.
//!
//! # Quick Start
//!
//! ```ignore
//! use lmrun::client::LmClient;
//! use lmrun::credentials::CredentialStore;
//! use lmrun::debug_command::run_debug_command;
//! use lmrun::script::{build_cmdline, load_script};
//!
//! let creds = CredentialStore::default_location()?.load()?;
//! let client = LmClient::new(&creds);
//! let (kind, body) = load_script("check.groovy".as_ref())?;
//! let output = run_debug_command(&client, 42, &build_cmdline(kind, &body)).await?;
//! println!("{output}");
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod collectors;
pub mod credentials;
pub mod debug_command;
pub mod error;
pub mod script;
