//! Recording fakes for exercising workflows without a repository or network.

use gjira_core::{Issue, IssueSource, RepoStatus, Result, Vcs};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A `Vcs` that answers from canned state and records every call in order.
pub struct RecordingVcs {
    pub current_branch: String,
    pub local_branches: BTreeSet<String>,
    calls: RefCell<Vec<String>>,
}

impl RecordingVcs {
    pub fn new(current_branch: &str, branches: &[&str]) -> Self {
        Self {
            current_branch: current_branch.to_owned(),
            local_branches: branches.iter().map(|b| (*b).to_owned()).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Vcs for RecordingVcs {
    fn status(&self) -> Result<RepoStatus> {
        self.record("status".into());
        Ok(RepoStatus {
            current_branch: self.current_branch.clone(),
            is_clean: false,
        })
    }

    fn branches(&self) -> Result<BTreeSet<String>> {
        self.record("branches".into());
        Ok(self.local_branches.clone())
    }

    fn stash(&self) -> Result<()> {
        self.record("stash".into());
        Ok(())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout {branch}"));
        Ok(())
    }

    fn checkout_new(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout-new {branch}"));
        Ok(())
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("pull {remote} {branch}"));
        Ok(())
    }

    fn add_all(&self) -> Result<()> {
        self.record("add-all".into());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit {message}"));
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {remote} {branch}"));
        Ok(())
    }
}

/// An `IssueSource` holding at most one issue.
pub struct FakeTracker {
    pub issue: Option<Issue>,
}

impl FakeTracker {
    pub fn with_issue(key: &str, summary: &str) -> Self {
        Self {
            issue: Some(Issue {
                key: key.to_owned(),
                summary: summary.to_owned(),
            }),
        }
    }

    pub fn empty() -> Self {
        Self { issue: None }
    }
}

impl IssueSource for FakeTracker {
    fn fetch_issue(&self, key: &str) -> Result<Option<Issue>> {
        Ok(self.issue.clone().filter(|issue| issue.key == key))
    }
}
