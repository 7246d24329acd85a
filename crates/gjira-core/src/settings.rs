//! Persisted tracker credentials and branch defaults.
//!
//! The store is a single JSON file, written whole by the configuration
//! wizard and read at startup by every other action. An unreadable or
//! corrupt file loads as absent, which forces reconfiguration instead
//! of crashing.

use crate::error::{GjiraError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides the settings directory (used by integration tests).
pub const CONFIG_DIR_ENV: &str = "GJIRA_CONFIG_DIR";

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub default_branch: String,
    /// Trackers behind self-signed certificates are the common deployment,
    /// so certificate verification is off unless this is set to `false`.
    #[serde(default = "default_allow_insecure_tls")]
    pub allow_insecure_tls: bool,
}

fn default_allow_insecure_tls() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            default_branch: String::new(),
            allow_insecure_tls: default_allow_insecure_tls(),
        }
    }
}

impl Settings {
    /// All four required fields are present. `allow_insecure_tls` always
    /// has a value and does not gate completeness.
    pub fn is_complete(&self) -> bool {
        !self.host.is_empty()
            && !self.username.is_empty()
            && !self.password.is_empty()
            && !self.default_branch.is_empty()
    }

    /// Resolve the settings directory: env override, then `~/.config/gjira`.
    pub fn store_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        Ok(home::home_dir()
            .ok_or(GjiraError::HomeNotFound)?
            .join(".config")
            .join("gjira"))
    }

    pub fn load() -> Result<Option<Settings>> {
        Ok(Self::load_from(&Self::store_dir()?))
    }

    /// Read settings from `dir`, treating a missing, unreadable, or corrupt
    /// file as absent.
    pub fn load_from(dir: &Path) -> Option<Settings> {
        let path = dir.join(CONFIG_FILE);
        let raw = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!("ignoring corrupt settings file {}: {e}", path.display());
                None
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_dir()?)
    }

    /// Overwrite the whole store atomically via a tempfile in the same
    /// directory, so a failed write never leaves a half-written file.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, self)?;
        tmp.persist(dir.join(CONFIG_FILE))
            .map_err(|e| GjiraError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn complete() -> Settings {
        Settings {
            host: "jira.example.com".into(),
            username: "alice".into(),
            password: "x".into(),
            default_branch: "develop".into(),
            allow_insecure_tls: true,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        complete().save_to(dir.path()).unwrap();
        let loaded = Settings::load_from(dir.path()).unwrap();
        assert_eq!(loaded, complete());
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::load_from(dir.path()).is_none());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(Settings::load_from(dir.path()).is_none());
    }

    #[test]
    fn missing_fields_default_and_read_as_incomplete() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"host":"jira.example.com"}"#,
        )
        .unwrap();
        let loaded = Settings::load_from(dir.path()).unwrap();
        assert!(!loaded.is_complete());
        assert!(loaded.allow_insecure_tls, "insecure TLS defaults on");
    }

    #[test]
    fn is_complete_requires_all_four_fields() {
        assert!(complete().is_complete());
        let strips: [fn(&mut Settings); 4] = [
            |s| s.host.clear(),
            |s| s.username.clear(),
            |s| s.password.clear(),
            |s| s.default_branch.clear(),
        ];
        for strip in strips {
            let mut s = complete();
            strip(&mut s);
            assert!(!s.is_complete());
        }
    }

    #[test]
    fn save_overwrites_previous_store() {
        let dir = TempDir::new().unwrap();
        complete().save_to(dir.path()).unwrap();
        let mut updated = complete();
        updated.default_branch = "main".into();
        updated.save_to(dir.path()).unwrap();
        let loaded = Settings::load_from(dir.path()).unwrap();
        assert_eq!(loaded.default_branch, "main");
    }
}
