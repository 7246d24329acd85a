//! Create or switch to the branch for a tracker issue.

use crate::cmd::ensure_settings;
use crate::output;
use anyhow::Context;
use gjira_core::{Git, GjiraError, IssueSource, Settings, TrackerClient, Vcs, DEFAULT_REMOTE};
use std::path::Path;

pub fn run(root: &Path, key: &str) -> anyhow::Result<()> {
    let settings = ensure_settings()?;
    let tracker = TrackerClient::new(&settings).context("failed to build tracker client")?;
    let git = Git::new(root);
    create_branch(&git, &tracker, &settings, key)
}

/// One pass, no retries: verify the issue exists, then move the working
/// tree onto its branch. Branch state is re-queried at each decision point
/// rather than assumed.
fn create_branch(
    git: &impl Vcs,
    tracker: &impl IssueSource,
    settings: &Settings,
    key: &str,
) -> anyhow::Result<()> {
    let issue = tracker
        .fetch_issue(key)
        .with_context(|| format!("failed to fetch issue {key}"))?;
    if issue.is_none() {
        return Err(GjiraError::IssueNotFound(key.to_owned()).into());
    }

    let status = git.status()?;
    if status.current_branch == key {
        output::info(&format!("Already on branch {key}"));
        return Ok(());
    }

    output::info("Stashing local changes");
    git.stash()?;

    if git.branches()?.contains(key) {
        output::info(&format!("Checking out {key}"));
        git.checkout(key)?;
    } else {
        output::info(&format!("Checking out {}", settings.default_branch));
        git.checkout(&settings.default_branch)?;
        output::info(&format!(
            "Pulling {} from {DEFAULT_REMOTE}",
            settings.default_branch
        ));
        git.pull(DEFAULT_REMOTE, &settings.default_branch)?;
        output::info(&format!("Checking out new {key}"));
        git.checkout_new(key)?;
    }
    Ok(())
}
