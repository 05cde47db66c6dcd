// ABOUTME: Immutable session configuration built once from interactive input
//
// All parameters for a run live here. The prompt phase constructs one
// `SessionConfig` value and the driver threads it through every step;
// nothing is held as ambient global state.

use std::path::PathBuf;

/// Default branch to push to when the user accepts the prompt default.
pub const DEFAULT_BRANCH: &str = "main";

/// Default commit message when the user leaves the prompt empty.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

/// Visibility of the remote repository to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// GitHub's creation payload wants a `private` boolean.
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Which files to stage before committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// Stage everything under the working tree (`git add .`).
    All,
    /// Stage only the listed paths, relative to the working tree root.
    Explicit(Vec<String>),
}

/// Everything one run needs, collected up front.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub username: String,
    pub token: String,
    pub repo_name: String,
    pub description: String,
    pub visibility: Visibility,
    pub local_path: PathBuf,
    pub branch: String,
    pub commit_message: String,
    pub selection: FileSelection,
    pub create_readme: bool,
}
