//! Common test utilities for tapfresh integration tests

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use git2::{Repository, Signature, Time};
use tempfile::TempDir;

const SECONDS_PER_DAY: i64 = 86_400;

fn epoch_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// A fixture tap: a git repository whose commits can be backdated
#[allow(dead_code)]
pub struct TestTap {
    temp: TempDir,
    repo: Repository,
}

#[allow(dead_code)]
impl TestTap {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repo = Repository::init(temp.path()).expect("Failed to init fixture tap");
        Self { temp, repo }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Commit the given files with a commit time `age_days` days in the past
    pub fn commit_files(&self, age_days: i64, files: &[(&str, &str)]) {
        let workdir = self.repo.workdir().expect("fixture tap has a workdir");
        let mut index = self.repo.index().expect("Failed to open index");

        for (path, content) in files {
            let file_path = workdir.join(path);
            std::fs::create_dir_all(file_path.parent().expect("file path has a parent"))
                .expect("Failed to create parent directory");
            std::fs::write(&file_path, content).expect("Failed to write fixture file");
            index
                .add_path(Path::new(path))
                .expect("Failed to add file to index");
        }
        index.write().expect("Failed to write index");

        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let when = Time::new(epoch_now() - age_days * SECONDS_PER_DAY, 0);
        let sig = Signature::new("test", "test@example.com", &when)
            .expect("Failed to create signature");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)
            .expect("Failed to commit fixture files");
    }
}

/// A stub `brew` executable on PATH, driven entirely by environment variables
#[allow(dead_code)]
pub struct BrewStub {
    temp: TempDir,
}

const STUB_SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  --version)
    echo "Homebrew 4.3.0"
    ;;
  --repository)
    case "$2" in
      homebrew/core) echo "$TAPFRESH_TEST_CORE" ;;
      homebrew/cask) echo "$TAPFRESH_TEST_CASK" ;;
      *) exit 1 ;;
    esac
    ;;
  list)
    case "$2" in
      --formula) printf '%s\n' $TAPFRESH_TEST_INSTALLED_FORMULAE ;;
      --cask) printf '%s\n' $TAPFRESH_TEST_INSTALLED_CASKS ;;
      *) exit 1 ;;
    esac
    ;;
  *)
    exit 1
    ;;
esac
"#;

#[allow(dead_code)]
impl BrewStub {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let script = temp.path().join("brew");
        std::fs::write(&script, STUB_SCRIPT).expect("Failed to write brew stub");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make brew stub executable");
        }

        Self { temp }
    }

    /// PATH value with the stub directory prepended
    pub fn path_env(&self) -> String {
        let inherited = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.temp.path().display(), inherited)
    }
}

/// Command for the real tapfresh binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn tapfresh_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("tapfresh").expect("tapfresh binary builds")
}

/// Command wired to the stub brew and the two fixture taps
#[allow(dead_code)]
pub fn report_cmd(stub: &BrewStub, core: &TestTap, cask: &TestTap) -> assert_cmd::Command {
    let mut cmd = tapfresh_cmd();
    cmd.env("PATH", stub.path_env())
        .env("TAPFRESH_TEST_CORE", core.path())
        .env("TAPFRESH_TEST_CASK", cask.path())
        .env("TAPFRESH_TEST_INSTALLED_FORMULAE", "")
        .env("TAPFRESH_TEST_INSTALLED_CASKS", "");
    cmd
}
