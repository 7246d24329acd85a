//! Commit and push the current branch with an issue-derived message.

use crate::cmd::ensure_settings;
use crate::output;
use anyhow::Context;
use gjira_core::{Git, GjiraError, IssueSource, TrackerClient, Vcs, DEFAULT_REMOTE};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let settings = ensure_settings()?;
    let tracker = TrackerClient::new(&settings).context("failed to build tracker client")?;
    let git = Git::new(root);
    push_current(&git, &tracker)
}

/// Stage everything, commit as `"<branch> - <issue summary>"`, push to
/// origin. The branch name doubles as the issue key; no issue, no commit.
fn push_current(git: &impl Vcs, tracker: &impl IssueSource) -> anyhow::Result<()> {
    let status = git.status()?;
    let branch = status.current_branch;

    let issue = tracker
        .fetch_issue(&branch)
        .with_context(|| format!("failed to fetch issue {branch}"))?;
    let Some(issue) = issue else {
        return Err(GjiraError::IssueNotFound(branch).into());
    };

    let message = format!("{branch} - {}", issue.summary);
    output::info(&format!("Committing {message}"));
    git.add_all()?;
    git.commit(&message)?;

    output::info(&format!("Pushing to {DEFAULT_REMOTE} {branch}"));
    git.push(DEFAULT_REMOTE, &branch)?;
    output::success("DONE");
    Ok(())
}
