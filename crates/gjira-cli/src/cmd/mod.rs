pub mod branch;
pub mod configure;
pub mod menu;
pub mod push;

#[cfg(test)]
pub mod testing;

use crate::{output, wizard};
use gjira_core::Settings;

/// Load settings, running the wizard first when any field is missing.
/// Every action except `configure` goes through here before touching the
/// network or the repository.
pub fn ensure_settings() -> anyhow::Result<Settings> {
    match Settings::load()? {
        Some(settings) if settings.is_complete() => Ok(settings),
        incomplete => {
            output::warn("gjira is not configured yet");
            wizard::run(incomplete.as_ref())
        }
    }
}
