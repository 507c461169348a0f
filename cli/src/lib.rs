//! Terminal client for the Stakr backend.
//!
//! Runs the same session, form, and readiness flows as the web client, with a
//! JSON file standing in for browser storage. Output goes to a caller-supplied
//! writer; diagnostics go through `tracing`.

pub mod api;
pub mod commands;
pub mod error;
pub mod store;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use flows::locale::LocalePreference;
use flows::store::SharedStore;
use flows::tokens::SessionTokens;

pub use commands::{Command, LocaleAction};
pub use error::CliError;

use crate::api::ApiClient;
use crate::store::FileStore;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(name = "stakr-cli", about = "Stakr account CLI")]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "STAKR_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Where the session token and locale are kept.
    #[arg(long, env = "STAKR_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Everything a command needs: the API client and the persisted session.
#[derive(Debug, Clone)]
pub struct Context {
    pub api: ApiClient,
    pub tokens: SessionTokens,
    pub locale: LocalePreference,
}

impl Context {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_url: &str, store: SharedStore) -> Result<Self, CliError> {
        let tokens = SessionTokens::new(Arc::clone(&store));
        let api = ApiClient::new(api_url, tokens.clone())?;
        Ok(Self { api, tokens, locale: LocalePreference::new(store) })
    }
}

/// Open the state file named by `cli` and run its command.
///
/// # Errors
///
/// Returns the command's [`CliError`].
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let path = cli.state_file.unwrap_or_else(store::default_state_path);
    tracing::debug!(path = %path.display(), api_url = %cli.api_url, "starting");
    let ctx = Context::new(&cli.api_url, Arc::new(FileStore::open(path)))?;
    commands::execute(&ctx, cli.command, out).await
}
