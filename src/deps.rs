// ABOUTME: External tool detection and best-effort installation

use std::process::Command;
use tracing::{info, warn};

use crate::error::SessionError;

/// Tools the flow cannot run without.
pub const REQUIRED_TOOLS: &[&str] = &["git"];

/// Package managers to try, in order, when a tool is missing.
/// Each entry is (manager, install arguments before the package name).
const PACKAGE_MANAGERS: &[(&str, &[&str])] = &[
    ("apt-get", &["install", "-y"]),
    ("dnf", &["install", "-y"]),
    ("pacman", &["-S", "--noconfirm"]),
    ("brew", &["install"]),
];

/// Check if a command exists on the system (cross-platform).
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

/// Verify every required tool is on PATH, attempting installation
/// through the first available package manager when one is missing.
pub fn ensure_dependencies() -> Result<(), SessionError> {
    for tool in REQUIRED_TOOLS {
        if command_exists(tool) {
            continue;
        }

        warn!("'{}' not found on PATH, attempting installation", tool);
        attempt_install(tool);

        if !command_exists(tool) {
            return Err(SessionError::DependencyInstallFailed {
                tool: (*tool).to_string(),
                reason: "not found on PATH after installation attempt".to_string(),
            });
        }
        info!("Installed '{}'", tool);
    }
    Ok(())
}

/// Run the first available package manager. Failure here is not fatal
/// by itself; the caller re-checks PATH afterwards.
fn attempt_install(tool: &str) {
    for (manager, args) in PACKAGE_MANAGERS {
        if !command_exists(manager) {
            continue;
        }

        info!("Installing '{}' via {}", tool, manager);
        match Command::new(manager).args(*args).arg(tool).status() {
            Ok(status) if status.success() => return,
            Ok(status) => warn!("{} exited with {}", manager, status),
            Err(e) => warn!("Failed to run {}: {}", manager, e),
        }
        return; // one manager per platform, no point trying the rest
    }
    warn!("No known package manager available to install '{}'", tool);
}
