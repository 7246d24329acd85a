//! No action given: make sure gjira is configured, then show what it does.

use crate::cmd::ensure_settings;

pub fn run() -> anyhow::Result<()> {
    ensure_settings()?;
    println!("Usage:");
    println!("  gjira configure   rerun the configuration wizard");
    println!("  gjira push        commit and push the current branch");
    println!("  gjira <ISSUE>     create or switch to the branch for <ISSUE>");
    Ok(())
}
