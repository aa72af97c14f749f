//! Integration tests for the credential lifecycle: login → run's load →
//! logout, against a temporary root directory.

use lmrun::credentials::{CredentialStore, Credentials};
use lmrun::error::LmError;

fn sample() -> Credentials {
    Credentials {
        account_name: "acme".to_string(),
        access_id: "AKIA123".to_string(),
        access_key: "s3cret".to_string(),
    }
}

#[test]
fn login_run_logout_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join(".lmrun"));

    // Before login: run must see MissingCredentials, not a raw I/O error.
    assert!(matches!(store.load(), Err(LmError::MissingCredentials)));

    // login
    store.save(&sample()).unwrap();

    // run loads the record back field-for-field.
    let loaded = store.load().unwrap();
    assert_eq!(loaded, sample());

    // logout deletes; a second logout fails rather than silently passing.
    store.delete().unwrap();
    assert!(matches!(store.delete(), Err(LmError::Storage { .. })));

    // After logout the next run is back to the never-logged-in state.
    assert!(matches!(store.load(), Err(LmError::MissingCredentials)));
}

#[test]
fn unreadable_config_is_a_storage_error_not_missing_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join(".lmrun"));

    // A directory sitting where the config file belongs: the path exists
    // but cannot be read as a file. This must surface as Storage (the
    // generic storage failure), not as the never-logged-in case.
    std::fs::create_dir_all(store.config_path()).unwrap();
    match store.load() {
        Err(LmError::Storage { .. }) => {}
        other => panic!("expected Storage error, got {other:?}"),
    }
}

#[test]
fn relogin_replaces_stored_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join(".lmrun"));

    store.save(&sample()).unwrap();
    let rotated = Credentials {
        access_key: "rotated".to_string(),
        ..sample()
    };
    store.save(&rotated).unwrap();

    assert_eq!(store.load().unwrap(), rotated);
}

#[test]
fn stored_file_is_human_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = CredentialStore::new(dir.path().join(".lmrun"));
    store.save(&sample()).unwrap();

    let text = std::fs::read_to_string(store.config_path()).unwrap();
    // One key per line with single-space indentation.
    assert!(text.starts_with("{\n \"account_name\""), "got:\n{text}");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["access_id"], "AKIA123");
}
