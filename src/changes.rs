//! Change retrieval from a tap's git history
//!
//! Walks the commit history of a local tap checkout and collects the paths of
//! package definition files added or modified within a day window. The caller
//! normalizes, sorts and deduplicates; the order returned here is whatever
//! the history walk produces.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use git2::{Delta, Repository, Sort};

use crate::error::{self, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Which kind of change to collect from the history walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
}

impl ChangeKind {
    fn matches(self, status: Delta) -> bool {
        match self {
            ChangeKind::Added => status == Delta::Added,
            ChangeKind::Modified => status == Delta::Modified,
        }
    }
}

fn epoch_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Collect paths of files with the given change kind under `prefix`,
/// from commits no older than `days` days.
///
/// Merge commits are skipped; every other commit is diffed against its first
/// parent (or the empty tree for a root commit), matching what
/// `git log --name-only` lists per commit.
pub fn recent_changes(
    tap: &str,
    checkout: &Path,
    days: u32,
    kind: ChangeKind,
    prefix: &str,
) -> Result<Vec<String>> {
    let repo =
        Repository::open(checkout).map_err(|e| error::tap_unavailable(tap, e.message()))?;

    let mut walk = repo
        .revwalk()
        .map_err(|e| error::tap_unavailable(tap, e.message()))?;
    walk.set_sorting(Sort::TIME)
        .map_err(|e| error::tap_unavailable(tap, e.message()))?;
    walk.push_head()
        .map_err(|e| error::tap_unavailable(tap, e.message()))?;

    let cutoff = epoch_now() - i64::from(days) * SECONDS_PER_DAY;
    let mut paths = Vec::new();

    for oid in walk {
        let oid = oid.map_err(|e| error::tap_unavailable(tap, e.message()))?;
        let commit = repo
            .find_commit(oid)
            .map_err(|e| error::tap_unavailable(tap, e.message()))?;

        // Sort::TIME walks newest-first, so the first too-old commit ends the scan
        if commit.time().seconds() < cutoff {
            break;
        }
        if commit.parent_count() > 1 {
            continue;
        }

        collect_commit_paths(&repo, &commit, kind, prefix, &mut paths)
            .map_err(|e| error::tap_unavailable(tap, e.message()))?;
    }

    Ok(paths)
}

fn collect_commit_paths(
    repo: &Repository,
    commit: &git2::Commit,
    kind: ChangeKind,
    prefix: &str,
    paths: &mut Vec<String>,
) -> std::result::Result<(), git2::Error> {
    let tree = commit.tree()?;
    let parent_tree = match commit.parent_count() {
        0 => None,
        _ => Some(commit.parent(0)?.tree()?),
    };

    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

    for delta in diff.deltas() {
        if !kind.matches(delta.status()) {
            continue;
        }
        if let Some(path) = delta.new_file().path().and_then(Path::to_str) {
            if path.starts_with(prefix) && path.ends_with(".rb") {
                paths.push(path.to_string());
            }
        }
    }

    Ok(())
}
