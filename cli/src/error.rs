use flows::store::StoreError;
use wire::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A user-facing failure, already rendered in the stored locale.
    #[error("{0}")]
    Rejected(String),
    #[error("not signed in; run `stakr-cli login` first")]
    NotSignedIn,
    #[error("backend is not ready")]
    NotReady,
    #[error("unknown locale `{0}` (expected fr or en)")]
    InvalidLocale(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("state file: {0}")]
    Store(#[from] StoreError),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}
