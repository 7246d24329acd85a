//! Adapter over the local `git` binary.
//!
//! Every operation shells out and re-queries the repository; nothing about
//! branch state is cached between calls. Failures carry the git subcommand
//! and whatever the binary printed, so the last progress line plus the
//! error locate the failing step.

use crate::error::{GjiraError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq)]
pub struct RepoStatus {
    pub current_branch: String,
    pub is_clean: bool,
}

/// The version-control operations the workflows drive. Implemented by
/// [`Git`] for real repositories and by recording fakes in tests.
pub trait Vcs {
    fn status(&self) -> Result<RepoStatus>;
    /// Local branches plus tracking refs, as short names.
    fn branches(&self) -> Result<BTreeSet<String>>;
    fn stash(&self) -> Result<()>;
    fn checkout(&self, branch: &str) -> Result<()>;
    fn checkout_new(&self, branch: &str) -> Result<()>;
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;
    fn add_all(&self) -> Result<()>;
    fn commit(&self, message: &str) -> Result<()>;
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

pub struct Git {
    root: PathBuf,
}

impl Git {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!(?args, root = %self.root.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| GjiraError::Git {
                op: args.join(" "),
                detail: e.to_string(),
            })?;
        if output.status.success() {
            return Ok(output);
        }
        Err(command_failed(args, &output))
    }

    fn run_stdout(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

fn command_failed(args: &[&str], output: &Output) -> GjiraError {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    let detail = if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        format!("exit status {}", output.status)
    };
    GjiraError::Git {
        op: args.join(" "),
        detail,
    }
}

impl Vcs for Git {
    fn status(&self) -> Result<RepoStatus> {
        let current_branch = self.run_stdout(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let porcelain = self.run_stdout(&["status", "--porcelain"])?;
        Ok(RepoStatus {
            current_branch,
            is_clean: porcelain.is_empty(),
        })
    }

    fn branches(&self) -> Result<BTreeSet<String>> {
        let out = self.run_stdout(&[
            "for-each-ref",
            "--format=%(refname:short)",
            "refs/heads",
            "refs/remotes",
        ])?;
        Ok(out
            .lines()
            .map(|line| line.trim().to_owned())
            .filter(|line| !line.is_empty())
            .collect())
    }

    fn stash(&self) -> Result<()> {
        self.run(&["stash"]).map(drop)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).map(drop)
    }

    fn checkout_new(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch]).map(drop)
    }

    // --ff-only: merge-conflict resolution is out of scope, so a pull that
    // cannot fast-forward fails instead of opening a merge.
    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["pull", "--ff-only", remote, branch]).map(drop)
    }

    fn add_all(&self) -> Result<()> {
        self.run(&["add", "--all"]).map(drop)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).map(drop)
    }
}
