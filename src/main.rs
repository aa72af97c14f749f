//! CLI entry point for lmrun — run local scripts on LogicMonitor collectors.
//!
//! Subcommands:
//! - `login` — store API credentials in `~/.lmrun/config.json`.
//! - `run <path>` — execute a `.groovy`/`.ps1` file on a collector and
//!   print the output.
//! - `logout` — delete the stored credentials.
//! - `collectors` — list the account's collectors.
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (missing credentials, storage failure, unsupported
//!   script type, API error, network failure)
//! - 2: argument validation error (clap handles this automatically)

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lmrun::client::LmClient;
use lmrun::collectors::{list_collectors, pick_random_collector};
use lmrun::credentials::{CredentialStore, Credentials};
use lmrun::debug_command::run_debug_command;
use lmrun::error::{LmError, Result};
use lmrun::script::{build_cmdline, load_script};

#[derive(Parser)]
#[command(name = "lmrun", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Long option names deliberately use underscores (`--account_name`,
/// `--collector_id`) rather than clap's default kebab-case: that is the
/// published CLI surface of this tool and existing shell scripts depend
/// on it.
#[derive(Subcommand)]
enum Commands {
    /// Store LogicMonitor API credentials. Prompts for any value not
    /// given as a flag.
    Login {
        /// Account (company) name, i.e. <name>.logicmonitor.com.
        #[arg(long = "account_name")]
        account_name: Option<String>,

        /// API token access id.
        #[arg(long = "access_id")]
        access_id: Option<String>,

        /// API token access key.
        #[arg(long = "access_key")]
        access_key: Option<String>,
    },

    /// Run a local .groovy or .ps1 script on a collector and print the
    /// execution output.
    Run {
        /// Path to the script file.
        path: PathBuf,

        /// Collector to run on. Omit to pick one at random from the
        /// account's collector list.
        #[arg(long = "collector_id")]
        collector_id: Option<i64>,
    },

    /// Delete the stored credentials. Fails if none are stored.
    Logout,

    /// List the collectors registered in the account.
    Collectors,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let store = match CredentialStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Login {
            account_name,
            access_id,
            access_key,
        } => command_login(&store, account_name, access_id, access_key),
        Commands::Run { path, collector_id } => command_run(&store, &path, collector_id).await,
        Commands::Logout => store.delete(),
        Commands::Collectors => command_collectors(&store).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Maps errors to their user-facing messages.
///
/// `MissingCredentials` and `Storage` get dedicated wording because they
/// are the failures a user can act on directly; everything else prints
/// its Display form (which for API errors includes the platform's own
/// diagnostic body).
fn report(err: &LmError) {
    match err {
        LmError::MissingCredentials => {
            eprintln!("Please login first by running 'lmrun login'");
        }
        LmError::Storage { .. } => {
            eprintln!("An error occurred while accessing the credential file in local storage.");
        }
        _ => eprintln!("Error: {err}"),
    }
}

/// Reads one line from stdin after printing a prompt, trimming whitespace.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// `login`: collect any values not given as flags interactively, then
/// persist them. Overwrites existing credentials.
fn command_login(
    store: &CredentialStore,
    account_name: Option<String>,
    access_id: Option<String>,
    access_key: Option<String>,
) -> Result<()> {
    let ask = |value: Option<String>, label: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => prompt(label).map_err(|source| LmError::Prompt { source }),
        }
    };

    let creds = Credentials {
        account_name: ask(account_name, "Please enter your LogicMonitor account name: ")?,
        access_id: ask(access_id, "Please enter the API access id: ")?,
        access_key: ask(access_key, "Please enter the API access key: ")?,
    };

    store.save(&creds)
}

/// `run`: the full pipeline — load credentials, read the script, resolve
/// a collector, submit, fetch, print. Any failure aborts; there is no
/// partial output.
async fn command_run(
    store: &CredentialStore,
    path: &std::path::Path,
    collector_id: Option<i64>,
) -> Result<()> {
    let creds = store.load()?;
    let client = LmClient::new(&creds);

    // Extension check happens before any network call, so a bad path
    // fails fast even when a random collector would have to be resolved.
    let (kind, script) = load_script(path)?;
    let cmdline = build_cmdline(kind, &script);

    let collector_id = match collector_id {
        Some(id) => id,
        None => pick_random_collector(&client).await?,
    };

    let output = run_debug_command(&client, collector_id, &cmdline).await?;
    println!("{output}");
    Ok(())
}

/// `collectors`: list the account's collectors, one per line.
async fn command_collectors(store: &CredentialStore) -> Result<()> {
    let creds = store.load()?;
    let client = LmClient::new(&creds);

    for c in list_collectors(&client).await? {
        let hostname = c.hostname.as_deref().unwrap_or("-");
        let description = c.description.as_deref().unwrap_or("");
        let state = if c.is_down { " (down)" } else { "" };
        println!("{}\t{}{}\t{}", c.id, hostname, state, description);
    }
    Ok(())
}
