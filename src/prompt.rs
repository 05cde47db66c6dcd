// ABOUTME: Interactive prompt flow - collects one SessionConfig up front
//
// Every session parameter is gathered here, before the first network or
// filesystem mutation, so an empty required input aborts a run that has
// not touched anything yet.

use dialoguer::{Confirm, Input, Password, Select};
use std::path::PathBuf;

use crate::config::{
    FileSelection, SessionConfig, Visibility, DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE,
};
use crate::error::SessionError;

/// Run the full prompt sequence and build the session configuration.
pub fn collect() -> Result<SessionConfig, SessionError> {
    let username: String = Input::new()
        .with_prompt("GitHub username")
        .allow_empty(true)
        .interact_text()?;
    let username = required(username, "Username")?;

    let token = Password::new()
        .with_prompt("Personal access token")
        .allow_empty_password(true)
        .interact()?;
    let token = required(token, "Token")?;

    let repo_name: String = Input::new()
        .with_prompt("Repository name")
        .allow_empty(true)
        .interact_text()?;
    let repo_name = required(repo_name, "Repository name")?;

    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let visibility = match Select::new()
        .with_prompt("Visibility")
        .items(&["Public", "Private"])
        .default(0)
        .interact()?
    {
        1 => Visibility::Private,
        _ => Visibility::Public,
    };

    let local_path: String = Input::new()
        .with_prompt("Local path")
        .default(".".to_string())
        .interact_text()?;

    let create_readme = Confirm::new()
        .with_prompt("Create a README?")
        .default(true)
        .interact()?;

    let commit_message: String = Input::new()
        .with_prompt("Commit message")
        .default(DEFAULT_COMMIT_MESSAGE.to_string())
        .interact_text()?;

    let branch: String = Input::new()
        .with_prompt("Branch")
        .default(DEFAULT_BRANCH.to_string())
        .interact_text()?;

    let selection = match Select::new()
        .with_prompt("Files to stage")
        .items(&["All files", "Choose files"])
        .default(0)
        .interact()?
    {
        1 => {
            let list: String = Input::new()
                .with_prompt("Files (space separated)")
                .allow_empty(true)
                .interact_text()?;
            FileSelection::Explicit(parse_file_list(&list)?)
        }
        _ => FileSelection::All,
    };

    Ok(SessionConfig {
        username,
        token,
        repo_name,
        description: description.trim().to_string(),
        visibility,
        local_path: PathBuf::from(or_default(local_path, ".")),
        branch: or_default(branch, DEFAULT_BRANCH),
        commit_message: or_default(commit_message, DEFAULT_COMMIT_MESSAGE),
        selection,
        create_readme,
    })
}

/// Trim and reject empty required input.
fn required(value: String, field: &'static str) -> Result<String, SessionError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(SessionError::EmptyInput(field));
    }
    Ok(trimmed)
}

/// Optional inputs are defaulted, never rejected: whitespace-only
/// answers (which bypass dialoguer's own default) fall back too.
fn or_default(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split a space-delimited file list, rejecting an empty selection.
fn parse_file_list(input: &str) -> Result<Vec<String>, SessionError> {
    let paths: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    if paths.is_empty() {
        return Err(SessionError::NoFilesSpecified);
    }
    Ok(paths)
}
