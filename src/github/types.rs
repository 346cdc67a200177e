// SPDX-License-Identifier: Apache-2.0

//! Wire and domain types for the migration endpoints.

use serde::Deserialize;

/// One import job as returned by the org migrations listing.
///
/// Only the attributes the tool acts on are modeled; serde drops the rest of
/// the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationJob {
    pub id: u64,
    pub guid: String,
    /// Free-form lifecycle state ("queued", "exported", "failed", ...).
    pub state: String,
    pub lock_repositories: bool,
    pub owner: Owner,
    #[serde(default)]
    pub repositories: Vec<RepositoryRef>,
}

/// A repository entry inside a migration job.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRef {
    pub id: u64,
    /// Qualified `org/repo` name, matched verbatim against the target.
    pub full_name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Everything needed to address one unlock call. The migration id must come
/// from a job whose repository list contains `org/repo`.
#[derive(Debug, Clone)]
pub struct UnlockRequest {
    pub migration_id: String,
    pub org: String,
    pub repo: String,
}

/// Outcome of a successful unlock attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockResult {
    pub status_code: u16,
}

/// Envelope wrapping the unlock mutation response.
#[derive(Debug, Deserialize)]
pub struct UnlockEnvelope {
    pub data: Option<UnlockPayload>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct UnlockPayload {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// One entry of a mutation response's error list.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub path: Vec<String>,
}
