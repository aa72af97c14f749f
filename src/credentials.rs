//! On-disk credential store for the LogicMonitor API token.
//!
//! `login` persists the account name and API token as indented JSON at
//! `<home>/.lmrun/config.json`; `run` reads it back; `logout` deletes it.
//! The store takes an explicit root directory so tests can point it at a
//! temporary directory instead of the real home.
//!
//! There is no locking and no atomic replace: the file is not expected to
//! be written by concurrent invocations, and a crash mid-write losing the
//! credentials simply means logging in again.

use crate::error::{LmError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory under the user's home that holds the config file.
const CONFIG_DIR: &str = ".lmrun";

/// File name of the stored credentials within the config directory.
const CONFIG_FILE: &str = "config.json";

/// A LogicMonitor account name plus API token.
///
/// Contents are not validated locally; the remote API accepting or
/// rejecting a signed request is the only validity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The account (company) name, i.e. the `<name>` in
    /// `<name>.logicmonitor.com`.
    pub account_name: String,
    /// The API token's access id.
    pub access_id: String,
    /// The API token's access key, used to sign requests.
    pub access_key: String,
}

/// Reads, writes, and deletes the credential file under a root directory.
pub struct CredentialStore {
    root: PathBuf,
}

impl CredentialStore {
    /// Creates a store rooted at an explicit directory. The directory does
    /// not need to exist yet; [`save`](Self::save) creates it on demand.
    pub fn new(root: PathBuf) -> Self {
        CredentialStore { root }
    }

    /// Creates a store rooted at `<home>/.lmrun`.
    ///
    /// # Errors
    ///
    /// [`LmError::NoHomeDir`] when the home directory cannot be resolved.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(LmError::NoHomeDir)?;
        Ok(Self::new(home.join(CONFIG_DIR)))
    }

    /// Full path of the config file within this store.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Serializes the credentials to the config file, creating missing
    /// parent directories and overwriting any existing file.
    ///
    /// The JSON is written human-readable with one-space indentation, the
    /// layout the original tool used, so existing config files remain
    /// byte-compatible.
    pub fn save(&self, creds: &Credentials) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| LmError::Storage { source })?;

        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        creds.serialize(&mut ser)?;

        fs::write(self.config_path(), out).map_err(|source| LmError::Storage { source })
    }

    /// Reads and parses the config file.
    ///
    /// # Errors
    ///
    /// - [`LmError::MissingCredentials`] when the file does not exist —
    ///   the user has never logged in (or has logged out).
    /// - [`LmError::Storage`] for any other read failure.
    /// - [`LmError::Parse`] when the file exists but is not valid JSON.
    pub fn load(&self) -> Result<Credentials> {
        let content = fs::read_to_string(self.config_path()).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LmError::MissingCredentials
            } else {
                LmError::Storage { source }
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Deletes the config file.
    ///
    /// An absent file is an error, not a silent success: `logout` without
    /// a prior `login` should tell the user nothing was stored.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(self.config_path()).map_err(|source| LmError::Storage { source })
    }
}
