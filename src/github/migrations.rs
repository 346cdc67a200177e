// SPDX-License-Identifier: Apache-2.0

//! Migration listing and the lookup that ties a repository to the job
//! holding its lock.

use reqwest::{Method, StatusCode};

use crate::log;
use crate::util::logging::LogLevel;

use super::client::GhClient;
use super::error::{GhError, snippet};
use super::types::MigrationJob;

/// Fetch every migration job the token can see for an organization.
pub async fn list_migrations(client: &GhClient, org: &str) -> Result<Vec<MigrationJob>, GhError> {
    let url = client.url(&format!("/orgs/{org}/migrations"));

    let response = client
        .request(Method::GET, &url)
        .send()
        .await
        .map_err(|source| GhError::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| GhError::Transport {
            url: url.clone(),
            source,
        })?;

    if status != StatusCode::OK {
        return Err(GhError::RequestFailed {
            url,
            status: status.as_u16(),
            body: snippet(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| GhError::DecodeFailed {
        url,
        body: snippet(&body),
        source,
    })
}

/// Find the migration that owns `org/repo` and return its identifier.
///
/// Jobs are scanned in the order the API returns them; the first job whose
/// repository list contains the target wins. Matching is exact and
/// case-sensitive.
pub async fn resolve_migration_id(
    client: &GhClient,
    org: &str,
    repo: &str,
) -> Result<String, GhError> {
    let migrations = list_migrations(client, org).await?;
    if migrations.is_empty() {
        return Err(GhError::NoMigrations {
            org: org.to_string(),
        });
    }

    log!(
        LogLevel::Info,
        "Found {} migration(s) for organization {org}.",
        migrations.len()
    );

    let full_name = format!("{org}/{repo}");
    for migration in &migrations {
        let Some(entry) = migration
            .repositories
            .iter()
            .find(|r| r.full_name == full_name)
        else {
            continue;
        };

        log!(
            LogLevel::Info,
            "Matched {} (repository id {}, owner {}).",
            entry.full_name,
            entry.id,
            entry.owner.login
        );
        log!(
            LogLevel::Info,
            "Owning migration: {} by {} (guid {}, state {}).",
            migration.id,
            migration.owner.login,
            migration.guid,
            migration.state
        );

        if !migration.lock_repositories {
            log!(
                LogLevel::Warning,
                "Migration {} was created without repository locking; the unlock may be a no-op.",
                migration.id
            );
        }

        return Ok(migration.id.to_string());
    }

    Err(GhError::NoMigrationForRepo {
        org: org.to_string(),
        repo: repo.to_string(),
    })
}
