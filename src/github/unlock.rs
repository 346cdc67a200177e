// SPDX-License-Identifier: Apache-2.0

//! The unlock call itself, in both wire flavors.
//!
//! GitHub deployments disagree on which endpoint releases a migration lock:
//! some take a plain REST delete, others only accept the
//! `unlockImportedRepositories` mutation. Both live here behind
//! [`unlock_repo`], selected by the client's configured transport.

use reqwest::{Method, StatusCode};
use serde_json::json;

use super::client::{GhClient, UnlockTransport};
use super::error::{GhError, snippet};
use super::types::{UnlockEnvelope, UnlockRequest, UnlockResult};

/// Feature flag GitHub requires before it accepts the mutation.
const GRAPHQL_FEATURES: &str = "octoshift_gl_exporter";

const UNLOCK_MUTATION: &str = r#"
mutation unlockImportedRepositories(
    $migrationId: ID!
    $org: String!
    $repo: String!
) {
    unlockImportedRepositories(
        input: {migrationId: $migrationId, org: $org, repo: $repo}
    ) {
        migration {
            guid
            id
            state
        }
        unlockedRepositories {
            nameWithOwner
        }
    }
}"#;

/// Release the migration lock using whichever transport the config selects.
pub async fn unlock_repo(
    client: &GhClient,
    request: &UnlockRequest,
) -> Result<UnlockResult, GhError> {
    match client.config().transport {
        UnlockTransport::Rest => unlock_via_rest(client, request).await,
        UnlockTransport::GraphQl => unlock_via_graphql(client, request).await,
    }
}

/// `DELETE /orgs/{org}/migrations/{id}/repos/{repo}/lock`. GitHub answers
/// 204 with an empty body on success; anything else is a failure.
async fn unlock_via_rest(
    client: &GhClient,
    request: &UnlockRequest,
) -> Result<UnlockResult, GhError> {
    let url = client.url(&format!(
        "/orgs/{}/migrations/{}/repos/{}/lock",
        request.org, request.migration_id, request.repo
    ));

    let response = client
        .request(Method::DELETE, &url)
        .send()
        .await
        .map_err(|source| GhError::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::NO_CONTENT {
        let body = response.text().await.unwrap_or_default();
        return Err(GhError::RequestFailed {
            url,
            status: status.as_u16(),
            body: snippet(&body),
        });
    }

    Ok(UnlockResult {
        status_code: status.as_u16(),
    })
}

/// POST the unlock mutation to `/graphql`. A 200 transport status is not
/// enough: the envelope's error list must be empty and `data.statusCode`
/// must itself be 200.
async fn unlock_via_graphql(
    client: &GhClient,
    request: &UnlockRequest,
) -> Result<UnlockResult, GhError> {
    let url = client.url("/graphql");

    let payload = json!({
        "query": UNLOCK_MUTATION,
        "variables": {
            "migrationId": request.migration_id,
            "org": request.org,
            "repo": request.repo,
        },
        "operationName": "unlockImportedRepositories",
    });

    let response = client
        .request(Method::POST, &url)
        .header("GraphQL-Features", GRAPHQL_FEATURES)
        .json(&payload)
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

    let envelope: UnlockEnvelope =
        serde_json::from_str(&body).map_err(|source| GhError::DecodeFailed {
            url: url.clone(),
            body: snippet(&body),
            source,
        })?;

    if let Some(first) = envelope.errors.first() {
        return Err(GhError::MutationRejected {
            org: request.org.clone(),
            repo: request.repo.clone(),
            migration_id: request.migration_id.clone(),
            message: first.message.clone(),
            kind: first.kind.clone(),
            path: first.path.clone(),
        });
    }

    let payload = envelope.data.ok_or_else(|| GhError::EmptyEnvelope {
        url,
        body: snippet(&body),
    })?;

    if payload.status_code != 200 {
        return Err(GhError::UnlockRejected {
            org: request.org.clone(),
            repo: request.repo.clone(),
            migration_id: request.migration_id.clone(),
            status: payload.status_code,
        });
    }

    Ok(UnlockResult {
        status_code: payload.status_code,
    })
}
