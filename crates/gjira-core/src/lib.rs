pub mod error;
pub mod git;
pub mod settings;
pub mod tracker;

pub use error::{GjiraError, Result};
pub use git::{Git, RepoStatus, Vcs, DEFAULT_REMOTE};
pub use settings::Settings;
pub use tracker::{Issue, IssueSource, TrackerClient};
