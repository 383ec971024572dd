//! Collaborator around the Homebrew executable
//!
//! This module handles:
//! - The prerequisite check that `brew` is runnable at all
//! - Resolving tap names to local checkout paths
//! - Building the installed-package name set

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{self, Result, TapfreshError};

/// Run `brew` with the given arguments and return its stdout
fn brew_output(args: &[&str]) -> Result<String> {
    let output = Command::new("brew")
        .args(args)
        .output()
        .map_err(|_| TapfreshError::BrewNotFound)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(error::brew_command_failed(
            format!("brew {}", args.join(" ")),
            stderr.trim(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Check that `brew` can be run at all.
///
/// Any failure here (missing binary, broken installation) is reported as
/// `BrewNotFound` so the run aborts before any retrieval work starts.
pub fn ensure_available() -> Result<()> {
    let output = Command::new("brew")
        .arg("--version")
        .output()
        .map_err(|_| TapfreshError::BrewNotFound)?;

    if !output.status.success() {
        return Err(TapfreshError::BrewNotFound);
    }

    Ok(())
}

/// Resolve a tap name (e.g. `homebrew/core`) to its local checkout path
pub fn tap_path(tap: &str) -> Result<PathBuf> {
    let stdout = brew_output(&["--repository", tap])?;
    let path = stdout.trim();

    if path.is_empty() {
        return Err(error::brew_command_failed(
            format!("brew --repository {tap}"),
            "empty output",
        ));
    }

    Ok(PathBuf::from(path))
}

/// Build the set of installed package names (formulae and casks, unioned)
pub fn installed_set() -> Result<HashSet<String>> {
    let mut installed = HashSet::new();
    collect_names(&brew_output(&["list", "--formula", "-1"])?, &mut installed);
    collect_names(&brew_output(&["list", "--cask", "-1"])?, &mut installed);
    Ok(installed)
}

/// Collect non-empty lines of a name listing into a set
fn collect_names(output: &str, names: &mut HashSet<String>) {
    for line in output.lines() {
        let name = line.trim();
        if !name.is_empty() {
            names.insert(name.to_string());
        }
    }
}
