//! Thin client for the tracker's REST issue endpoint.
//!
//! One request shape matters: `GET /rest/api/2/issue/{key}` with basic
//! auth. A 404 is the "no such issue" answer, not a failure; every other
//! non-success status aborts the current command.

use crate::error::{GjiraError, Result};
use crate::settings::Settings;
use serde::Deserialize;

/// A tracker issue, reduced to what the workflows need.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
}

#[derive(Deserialize)]
struct IssuePayload {
    key: String,
    fields: IssueFields,
}

#[derive(Deserialize)]
struct IssueFields {
    summary: String,
}

/// Seam for the workflows, so they can be exercised without a network.
pub trait IssueSource {
    fn fetch_issue(&self, key: &str) -> Result<Option<Issue>>;
}

pub struct TrackerClient {
    http: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
}

impl TrackerClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_base_url(settings, format!("https://{}", settings.host))
    }

    /// Test seam: mockito serves plain http on a local port.
    pub fn with_base_url(settings: &Settings, base_url: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(settings.allow_insecure_tls)
            .build()?;
        Ok(Self {
            http,
            base_url,
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }
}

impl IssueSource for TrackerClient {
    fn fetch_issue(&self, key: &str) -> Result<Option<Issue>> {
        let url = format!("{}/rest/api/2/issue/{key}", self.base_url);
        tracing::debug!(%url, "fetching issue");
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(GjiraError::TrackerStatus(response.status().as_u16()));
        }
        let payload: IssuePayload = response.json()?;
        Ok(Some(Issue {
            key: payload.key,
            summary: payload.fields.summary,
        }))
    }
}
