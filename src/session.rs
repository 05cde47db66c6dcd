// ABOUTME: The linear session driver - composes every step with ? and stops
// at the first failure
//
// Step order: remote resolve -> local init -> remote wiring -> README ->
// staging -> commit -> push -> credential scrub. The scrub is held in a
// guard from the moment the authenticated URL hits the remote config, so
// aborted runs also get a best-effort token removal.

use tracing::info;

use crate::config::{FileSelection, SessionConfig};
use crate::error::SessionError;
use crate::git::{LocalRepo, RepoUrls, ScrubGuard};
use crate::github::{GithubClient, RepoResolution};
use crate::readme;

/// How a successful run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Committed and pushed; the remote now holds the content.
    Pushed { repo_url: String },
    /// The index matched the last commit, so there was nothing to do.
    NothingToCommit,
}

/// Run the whole flow for one collected configuration.
pub fn run(config: &SessionConfig, github: &GithubClient) -> Result<Outcome, SessionError> {
    info!("Session started for {}/{}", config.username, config.repo_name);

    let resolution =
        github.resolve_repo(&config.repo_name, &config.description, config.visibility)?;
    match &resolution {
        RepoResolution::Created(repo) => println!("Created repository '{}'", repo.name),
        RepoResolution::Existing(repo) => println!("Reusing existing repository '{}'", repo.name),
    }

    let repo = LocalRepo::ensure(&config.local_path)?;

    let urls = RepoUrls::for_repo(&config.username, &config.token, &config.repo_name)?;
    repo.configure_origin(urls.authenticated())?;
    let scrub = ScrubGuard::new(&repo, urls.public());

    if config.create_readme {
        let readme_path =
            readme::create_readme(repo.path(), &config.repo_name, &config.description)?;
        readme::open_in_editor(&readme_path);
    }

    match &config.selection {
        FileSelection::All => repo.stage_all()?,
        FileSelection::Explicit(paths) => repo.stage_paths(paths)?,
    }

    if !repo.has_staged_changes()? {
        println!("Nothing to commit - working tree matches the last commit");
        info!("No staged changes, exiting without commit or push");
        scrub.scrub()?;
        return Ok(Outcome::NothingToCommit);
    }

    repo.commit(&config.commit_message)?;
    repo.push(&config.branch)?;
    println!("Pushed to origin/{}", config.branch);

    scrub.scrub()?;
    info!("Session finished, remote URL scrubbed");

    let repo_url = resolution
        .info()
        .html_url
        .clone()
        .unwrap_or_else(|| urls.public().to_string());
    Ok(Outcome::Pushed { repo_url })
}
