// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// How much of a response body an error is allowed to carry.
const SNIPPET_LEN: usize = 200;

/// Errors produced while talking to the GitHub API.
///
/// Four families, all terminal for a run:
/// - configuration: [`GhError::MissingToken`]
/// - transport: [`GhError::ClientBuild`], [`GhError::Transport`]
/// - protocol: [`GhError::RequestFailed`], [`GhError::DecodeFailed`],
///   [`GhError::EmptyEnvelope`]
/// - logical: everything else
#[derive(Debug, Error)]
pub enum GhError {
    /// GITHUB_TOKEN was absent from the environment.
    #[error("GITHUB_TOKEN environment variable is not set")]
    MissingToken,

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The platform answered with a status the endpoint contract does not allow.
    #[error("unexpected response status {status} from {url}: {body}")]
    RequestFailed {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not decode as the expected JSON shape.
    #[error("failed to decode response from {url}: {source} (body: {body})")]
    DecodeFailed {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 200 mutation response whose envelope carried neither data nor errors.
    #[error("response from {url} carried neither data nor errors: {body}")]
    EmptyEnvelope { url: String, body: String },

    /// The organization has no migrations at all.
    #[error("no migrations found for organization {org}")]
    NoMigrations { org: String },

    /// Migrations exist, but none of them contains the repository.
    #[error("no migration found containing {org}/{repo}")]
    NoMigrationForRepo { org: String, repo: String },

    /// The unlock mutation came back with an embedded error list.
    #[error(
        "unlock of {org}/{repo} (migration {migration_id}) rejected: {message} (type {kind}, path {path:?})"
    )]
    MutationRejected {
        org: String,
        repo: String,
        migration_id: String,
        message: String,
        kind: String,
        path: Vec<String>,
    },

    /// The unlock mutation reported a non-success logical status.
    #[error("unlock of {org}/{repo} (migration {migration_id}) reported status {status}")]
    UnlockRejected {
        org: String,
        repo: String,
        migration_id: String,
        status: u16,
    },
}

/// Clip a response body down to something loggable.
pub(crate) fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= SNIPPET_LEN {
        trimmed.to_string()
    } else {
        let clipped: String = trimmed.chars().take(SNIPPET_LEN).collect();
        format!("{clipped}...")
    }
}
