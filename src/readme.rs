// ABOUTME: Optional README stub creation and editor hand-off

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::deps::command_exists;
use crate::error::SessionError;

const DEFAULT_EDITOR: &str = "vi";

/// Write a README stub into the working tree unless one already
/// exists, then hand it to the user's editor for a final pass.
pub fn create_readme(
    repo_root: &Path,
    repo_name: &str,
    description: &str,
) -> Result<PathBuf, SessionError> {
    let path = repo_root.join("README.md");
    if path.exists() {
        info!("README.md already exists, leaving it alone");
        return Ok(path);
    }

    let contents = if description.trim().is_empty() {
        format!("# {repo_name}\n")
    } else {
        format!("# {repo_name}\n\n{description}\n")
    };
    std::fs::write(&path, contents).map_err(|e| {
        SessionError::Filesystem(format!("failed to write '{}': {e}", path.display()))
    })?;

    info!("Created {}", path.display());
    Ok(path)
}

/// Open the README in the editor named by `$EDITOR`, falling back to
/// `vi`. Blocks until the editor exits. An unavailable or failing
/// editor is logged, not fatal - the stub is already on disk.
pub fn open_in_editor(path: &Path) {
    let Some(editor) = resolve_editor() else {
        warn!("No editor found, skipping README editing");
        return;
    };

    info!("Opening {} in {}", path.display(), editor);
    match std::process::Command::new(&editor).arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("{} exited with {}", editor, status),
        Err(e) => warn!("Failed to launch {}: {}", editor, e),
    }
}

/// Resolve which editor to use via fallback chain:
/// 1. $EDITOR env var
/// 2. vi
/// 3. None
fn resolve_editor() -> Option<String> {
    if let Ok(editor) = std::env::var("EDITOR") {
        if !editor.trim().is_empty() && command_exists(&editor) {
            return Some(editor);
        }
    }

    if command_exists(DEFAULT_EDITOR) {
        return Some(DEFAULT_EDITOR.to_string());
    }

    None
}
