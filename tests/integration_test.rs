// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod tests {
    use serde_json::json;
    use unlatch::github::migrations::resolve_migration_id;
    use unlatch::github::types::UnlockRequest;
    use unlatch::github::unlock::unlock_repo;
    use unlatch::github::{GhClient, GhConfig, UnlockTransport};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, transport: UnlockTransport) -> GhClient {
        let config = GhConfig::new("test-token".to_string(), &server.uri(), transport);
        GhClient::new(config).unwrap()
    }

    async fn mount_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/orgs/acme/migrations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 42,
                "owner": { "login": "acme" },
                "guid": "guid-42",
                "state": "exported",
                "lock_repositories": true,
                "repositories": [{
                    "id": 9001,
                    "node_id": "R_kgD9001",
                    "name": "widgets",
                    "full_name": "acme/widgets",
                    "owner": { "login": "acme" },
                }],
            }])))
            .mount(server)
            .await;
    }

    // The full run: resolve the owning migration, then release the lock.
    #[tokio::test]
    async fn resolve_then_unlock_via_rest() {
        let server = MockServer::start().await;
        mount_listing(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/orgs/acme/migrations/42/repos/widgets/lock"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, UnlockTransport::Rest);
        let migration_id = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap();
        assert_eq!(migration_id, "42");

        let request = UnlockRequest {
            migration_id,
            org: "acme".to_string(),
            repo: "widgets".to_string(),
        };
        let result = unlock_repo(&client, &request).await.unwrap();
        assert_eq!(result.status_code, 204);
    }

    #[tokio::test]
    async fn resolve_then_unlock_via_graphql() {
        let server = MockServer::start().await;
        mount_listing(&server).await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "statusCode": 200 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, UnlockTransport::GraphQl);
        let migration_id = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap();
        assert_eq!(migration_id, "42");

        let request = UnlockRequest {
            migration_id,
            org: "acme".to_string(),
            repo: "widgets".to_string(),
        };
        let result = unlock_repo(&client, &request).await.unwrap();
        assert_eq!(result.status_code, 200);
    }
}
