// file: src/update/checker.rs
// version: 0.3.0
// guid: 9d0e1f2a-3b4c-5d6e-7f8a-9b0c1d2e3f4a

//! Version check against the project release page
//!
//! The release page is plain HTML, not a structured endpoint. The page is
//! scanned for the literal `Version` marker and the five characters at a
//! fixed offset past it are taken as the published version string, which
//! is then compared against the local version as a plain string. The
//! extraction is bounds-checked: a missing marker or a truncated page
//! yields an explicit unparseable outcome rather than reading past the
//! body.

use crate::VERSION;
use tracing::{debug, warn};

/// Page scraped for the published version string
pub const UPDATE_URL: &str = "https://gitlab.com/Fred-Barclay/Argo/tags";

/// Literal preceding the published version on the release page
const VERSION_MARKER: &str = "Version";

/// Characters between the start of the marker and the version field
const VERSION_OFFSET: usize = 8;

/// Length of the version field, e.g. `0.3.0`
const VERSION_LEN: usize = 5;

/// Result of one update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The published version matches the local one
    UpToDate,
    /// A newer version is published
    UpdateAvailable { remote: String },
    /// The local version is ahead of the published one
    LocalNewer { remote: String },
    /// The page was fetched but no version field could be extracted
    Unparseable,
    /// The update server could not be reached or answered non-success
    CannotCheck,
}

/// Checks the release page for a newer published version
pub struct UpdateChecker {
    client: reqwest::Client,
    url: String,
}

impl UpdateChecker {
    /// Create a new update checker against the project release page
    pub fn new() -> Self {
        Self::with_url(UPDATE_URL)
    }

    /// Create an update checker against an alternate page
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch the release page and compare versions
    ///
    /// A transport failure or a non-success status is a normal outcome,
    /// not an error: the check is best-effort and never retried.
    pub async fn check(&self) -> UpdateOutcome {
        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Cannot connect to the update server: {}", e);
                return UpdateOutcome::CannotCheck;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Cannot connect to the update server at this time (status {})",
                response.status()
            );
            return UpdateOutcome::CannotCheck;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read update server response: {}", e);
                return UpdateOutcome::CannotCheck;
            }
        };

        match parse_remote_version(&body) {
            Some(remote) => {
                debug!("Published version: {}", remote);
                compare_versions(&remote, VERSION)
            }
            None => UpdateOutcome::Unparseable,
        }
    }
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the five-character version field following the marker
///
/// Returns `None` when the marker is absent, the field would run past the
/// end of the body, or the field straddles a UTF-8 character boundary.
pub fn parse_remote_version(body: &str) -> Option<String> {
    let index = body.find(VERSION_MARKER)?;
    let start = index + VERSION_OFFSET;
    let end = start + VERSION_LEN;
    body.get(start..end).map(str::to_string)
}

/// Naive string comparison between the published and local versions
pub fn compare_versions(remote: &str, local: &str) -> UpdateOutcome {
    if remote > local {
        UpdateOutcome::UpdateAvailable {
            remote: remote.to_string(),
        }
    } else if remote == local {
        UpdateOutcome::UpToDate
    } else {
        UpdateOutcome::LocalNewer {
            remote: remote.to_string(),
        }
    }
}
