// ABOUTME: Behavioral tests for the local repository flow - init through scrub

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;

use gitship::error::SessionError;
use gitship::git::{LocalRepo, RepoUrls, ScrubGuard};

use super::fixtures::{BareRemote, TestRepo};

/// A nonexistent path is created and initialized in one step.
#[test]
fn test_ensure_creates_directory_and_initializes() -> Result<()> {
    let parent = tempfile::TempDir::new()?;
    let target = parent.path().join("demo");
    assert!(!target.exists());

    let repo = LocalRepo::ensure(&target)?;

    assert!(target.exists(), "directory should be created");
    assert!(target.join(".git").exists(), "repository should be initialized");
    assert_eq!(repo.path(), target.as_path());
    Ok(())
}

/// An existing plain directory gets initialized in place.
#[test]
fn test_ensure_initializes_existing_plain_directory() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    fs::write(dir.path().join("notes.txt"), "keep me")?;

    LocalRepo::ensure(dir.path())?;

    assert!(dir.path().join(".git").exists());
    assert!(dir.path().join("notes.txt").exists(), "existing content untouched");
    Ok(())
}

/// Re-running ensure against an existing checkout leaves history alone.
#[test]
fn test_ensure_preserves_existing_history() -> Result<()> {
    let existing = TestRepo::with_initial_commit()?;
    let head_before = existing.head()?;

    LocalRepo::ensure(existing.path())?;

    assert_eq!(existing.head()?, head_before, "history must not be rewritten");
    Ok(())
}

/// configure_origin replaces a prior origin rather than erroring.
#[test]
fn test_configure_origin_replaces_previous_remote() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());

    repo.configure_origin("https://github.com/octocat/old.git")?;
    repo.configure_origin("https://github.com/octocat/new.git")?;

    assert_eq!(
        repo.origin_url().as_deref(),
        Some("https://github.com/octocat/new.git")
    );
    Ok(())
}

/// Absence of a prior origin is not an error.
#[test]
fn test_configure_origin_without_prior_remote() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());

    repo.configure_origin("https://github.com/octocat/demo.git")?;

    assert!(repo.origin_url().is_some());
    Ok(())
}

/// stage_all picks up new files, and the index is seen as changed.
#[test]
fn test_stage_all_detects_staged_changes() -> Result<()> {
    let fixture = TestRepo::empty()?;
    fs::write(fixture.path().join("a.txt"), "a")?;
    fs::write(fixture.path().join("b.txt"), "b")?;
    let repo = LocalRepo::open(fixture.path());

    assert!(!repo.has_staged_changes()?, "nothing staged yet");
    repo.stage_all()?;
    assert!(repo.has_staged_changes()?, "staged files must be detected");
    Ok(())
}

/// A clean checkout reports nothing staged - the no-op exit path.
#[test]
fn test_clean_checkout_has_no_staged_changes() -> Result<()> {
    let fixture = TestRepo::with_initial_commit()?;
    let repo = LocalRepo::open(fixture.path());

    repo.stage_all()?;

    assert!(
        !repo.has_staged_changes()?,
        "index matching the last commit means nothing to do"
    );
    Ok(())
}

/// One missing path fails the whole staging operation before any path
/// is staged - no partial stage may persist.
#[test]
fn test_stage_paths_missing_path_leaves_index_untouched() -> Result<()> {
    let fixture = TestRepo::empty()?;
    fs::write(fixture.path().join("a.txt"), "a")?;
    let repo = LocalRepo::open(fixture.path());

    let err = repo
        .stage_paths(&["a.txt".to_string(), "missing.txt".to_string()])
        .unwrap_err();

    assert!(matches!(err, SessionError::FileNotFound(ref p) if p == "missing.txt"));
    assert!(
        !repo.has_staged_changes()?,
        "valid paths must not be left staged after the failure"
    );
    Ok(())
}

/// Explicit staging only touches the listed paths.
#[test]
fn test_stage_paths_stages_listed_files_only() -> Result<()> {
    let fixture = TestRepo::empty()?;
    fs::write(fixture.path().join("a.txt"), "a")?;
    fs::write(fixture.path().join("b.txt"), "b")?;
    let repo = LocalRepo::open(fixture.path());

    repo.stage_paths(&["a.txt".to_string()])?;

    let status = fixture.porcelain()?;
    assert!(status.contains("A  a.txt"), "a.txt staged: {status}");
    assert!(status.contains("?? b.txt"), "b.txt untouched: {status}");
    Ok(())
}

/// Empty commit messages are rejected before git runs.
#[test]
fn test_commit_rejects_empty_message() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());

    let err = repo.commit("   ").unwrap_err();
    assert!(matches!(err, SessionError::EmptyInput(_)));
    Ok(())
}

/// Full local flow: stage, commit, push to a bare remote, scrub.
#[test]
fn test_commit_push_and_scrub_against_bare_remote() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let remote = BareRemote::new()?;
    fs::write(fixture.path().join("hello.txt"), "hello")?;

    let repo = LocalRepo::open(fixture.path());
    repo.configure_origin(&remote.url())?;
    repo.stage_all()?;
    repo.commit("Initial commit")?;
    repo.push("main")?;

    assert!(remote.has_branch("main"), "push must create the named branch");

    let public = "https://github.com/octocat/demo.git";
    repo.scrub_remote(public)?;
    assert_eq!(repo.origin_url().as_deref(), Some(public));
    Ok(())
}

/// After a scrub the stored remote URL matches the public form exactly
/// and carries no token.
#[test]
fn test_scrub_removes_token_from_remote() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());
    let urls = RepoUrls::for_repo("octocat", "ghp_secret123", "demo")?;

    repo.configure_origin(urls.authenticated())?;
    assert!(repo.origin_url().unwrap().contains("ghp_secret123"));

    repo.scrub_remote(urls.public())?;

    let stored = repo.origin_url().unwrap();
    assert_eq!(stored, urls.public(), "stored URL must equal the public form");
    assert!(!stored.contains("ghp_secret123"));
    Ok(())
}

/// Dropping an armed guard scrubs best-effort on abnormal exit paths.
#[test]
fn test_scrub_guard_scrubs_on_drop() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());
    let urls = RepoUrls::for_repo("octocat", "ghp_secret123", "demo")?;
    repo.configure_origin(urls.authenticated())?;

    {
        let _guard = ScrubGuard::new(&repo, urls.public());
        // simulated failure: guard dropped without an explicit scrub
    }

    assert_eq!(repo.origin_url().as_deref(), Some(urls.public()));
    Ok(())
}

/// An explicit scrub disarms the guard and reports success.
#[test]
fn test_scrub_guard_explicit_scrub() -> Result<()> {
    let fixture = TestRepo::empty()?;
    let repo = LocalRepo::open(fixture.path());
    let urls = RepoUrls::for_repo("octocat", "ghp_secret123", "demo")?;
    repo.configure_origin(urls.authenticated())?;

    let guard = ScrubGuard::new(&repo, urls.public());
    guard.scrub()?;

    assert_eq!(repo.origin_url().as_deref(), Some(urls.public()));
    Ok(())
}
