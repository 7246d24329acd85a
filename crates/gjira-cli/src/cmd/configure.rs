//! Run the configuration wizard directly.

use crate::wizard;
use gjira_core::Settings;

pub fn run() -> anyhow::Result<()> {
    let existing = Settings::load()?;
    wizard::run(existing.as_ref())?;
    Ok(())
}
