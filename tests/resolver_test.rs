// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use unlatch::github::migrations::resolve_migration_id;
    use unlatch::github::{GhClient, GhConfig, GhError, UnlockTransport};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "test-token";

    fn client_for(server: &MockServer) -> GhClient {
        let config = GhConfig::new(TOKEN.to_string(), &server.uri(), UnlockTransport::Rest);
        GhClient::new(config).unwrap()
    }

    /// One migration job shaped the way the listing endpoint returns it.
    fn migration_json(id: u64, lock_repositories: bool, full_names: &[&str]) -> Value {
        let repositories: Vec<Value> = full_names
            .iter()
            .enumerate()
            .map(|(idx, full_name)| {
                let (owner, name) = full_name.split_once('/').unwrap();
                json!({
                    "id": 1000 + idx as u64,
                    "node_id": format!("R_kgD{idx}"),
                    "name": name,
                    "full_name": full_name,
                    "owner": { "login": owner },
                })
            })
            .collect();

        json!({
            "id": id,
            "owner": { "login": "acme" },
            "guid": format!("guid-{id}"),
            "state": "exported",
            "lock_repositories": lock_repositories,
            "repositories": repositories,
        })
    }

    async fn mount_listing(server: &MockServer, org: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/orgs/{org}/migrations")))
            .and(header("authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn first_matching_migration_wins() {
        let server = MockServer::start().await;
        mount_listing(
            &server,
            "acme",
            json!([
                migration_json(13, true, &["acme/unrelated"]),
                migration_json(42, true, &["acme/sprockets", "acme/widgets"]),
                migration_json(77, true, &["acme/widgets"]),
            ]),
        )
        .await;

        let client = client_for(&server);
        let id = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap();
        assert_eq!(id, "42");
    }

    #[tokio::test]
    async fn empty_listing_is_its_own_error() {
        let server = MockServer::start().await;
        mount_listing(&server, "acme", json!([])).await;

        let client = client_for(&server);
        let err = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap_err();
        assert!(matches!(err, GhError::NoMigrations { .. }));
    }

    #[tokio::test]
    async fn unmatched_repo_is_distinct_from_empty_listing() {
        let server = MockServer::start().await;
        mount_listing(
            &server,
            "acme",
            json!([migration_json(42, true, &["acme/sprockets"])]),
        )
        .await;

        let client = client_for(&server);
        let err = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap_err();
        assert!(matches!(err, GhError::NoMigrationForRepo { .. }));
    }

    #[tokio::test]
    async fn matching_is_case_sensitive() {
        let server = MockServer::start().await;
        mount_listing(
            &server,
            "acme",
            json!([migration_json(42, true, &["Acme/Widgets"])]),
        )
        .await;

        let client = client_for(&server);
        let err = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap_err();
        assert!(matches!(err, GhError::NoMigrationForRepo { .. }));
    }

    #[tokio::test]
    async fn non_success_status_carries_the_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/migrations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap_err();
        assert!(matches!(err, GhError::RequestFailed { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/migrations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = resolve_migration_id(&client, "acme", "widgets")
            .await
            .unwrap_err();
        assert!(matches!(err, GhError::DecodeFailed { .. }));
    }
}
