// ABOUTME: Flat error taxonomy for the publish session - every failure is fatal

use thiserror::Error;

/// Every way a publish session can fail. The flow has no retries and no
/// rollback, so each variant maps to a single fatal exit with code 1.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to install '{tool}': {reason}")]
    DependencyInstallFailed { tool: String, reason: String },

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("Repository creation failed: {0} - check that the token has the 'repo' scope")]
    RepoCreationFailed(String),

    #[error("Filesystem error: {0}")]
    Filesystem(String),

    #[error("Failed to initialize repository: {0}")]
    Init(String),

    #[error("Failed to configure remote 'origin': {0}")]
    RemoteConfig(String),

    #[error("No files specified")]
    NoFilesSpecified,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to stage files: {0}")]
    Stage(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Push failed: {0}")]
    Push(String),

    #[error("Failed to remove credentials from remote URL: {0}")]
    Cleanup(String),

    /// Interactive prompt was interrupted or the terminal went away.
    #[error("Prompt aborted: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Catch-all for abnormal conditions outside the named kinds.
    #[error("Unexpected termination: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        SessionError::Unexpected(format!("GitHub API request failed: {err}"))
    }
}
