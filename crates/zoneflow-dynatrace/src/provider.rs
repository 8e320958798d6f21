//! `ZoneApi` implementation backed by the Dynatrace client

use crate::client::DynatraceClient;
use async_trait::async_trait;
use zoneflow_cloud::{ManagementZone, ZoneApi, ZoneSummary};

#[async_trait]
impl ZoneApi for DynatraceClient {
    fn name(&self) -> &str {
        "dynatrace"
    }

    async fn list_zones(&self) -> zoneflow_cloud::Result<Vec<ZoneSummary>> {
        Ok(DynatraceClient::list_zones(self).await?)
    }

    async fn create_zone(&self, zone: &ManagementZone) -> zoneflow_cloud::Result<ZoneSummary> {
        let created = DynatraceClient::create_zone(self, zone).await?;
        tracing::debug!("Dynatrace assigned id {} to zone {}", created.id, created.name);
        Ok(created)
    }

    async fn update_zone(&self, id: &str, zone: &ManagementZone) -> zoneflow_cloud::Result<()> {
        Ok(DynatraceClient::update_zone(self, id, zone).await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynatraceClient, DynatraceConfig};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zoneflow_cloud::{CloudError, Reconciler, RuleMode};
    use zoneflow_config::TeamRecord;

    fn team(entity: &str, prefixes: &[&str]) -> TeamRecord {
        TeamRecord {
            key: entity.to_string(),
            entity: entity.to_string(),
            host_group_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn rule(prefix: &str) -> serde_json::Value {
        json!({
            "type": "PROCESS_GROUP",
            "enabled": true,
            "propagationTypes": ["PROCESS_GROUP_TO_SERVICE", "PROCESS_GROUP_TO_HOST"],
            "conditions": [{
                "key": { "attribute": "HOST_GROUP_NAME" },
                "comparisonInfo": {
                    "type": "STRING",
                    "operator": "BEGINS_WITH",
                    "value": prefix,
                    "negate": false,
                    "caseSensitive": true
                }
            }]
        })
    }

    async fn mount_zone_list(server: &MockServer, zones: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/config/v1/managementZones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": zones })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_reconcile_against_http_api() {
        let server = MockServer::start().await;
        mount_zone_list(&server, json!([{ "id": "-7", "name": "known" }])).await;

        Mock::given(method("PUT"))
            .and(path("/api/config/v1/managementZones/-7"))
            .and(body_json(json!({ "name": "known", "rules": [] })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/config/v1/managementZones/-7"))
            .and(body_json(json!({ "name": "known", "rules": [rule("app-")] })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/config/v1/managementZones"))
            .and(body_json(json!({ "name": "fresh", "rules": [] })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "id": "99", "name": "fresh" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/config/v1/managementZones/99"))
            .and(body_json(json!({ "name": "fresh", "rules": [rule("db-")] })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = DynatraceClient::new(DynatraceConfig::new(server.uri(), "token"));
        let teams = vec![team("known", &["app-"]), team("fresh", &["db-"])];

        let result = Reconciler::new(&client)
            .with_mode(RuleMode::Overwrite)
            .run(&teams)
            .await
            .unwrap();

        assert_eq!(result.succeeded.len(), 4);
    }

    #[tokio::test]
    async fn test_http_error_aborts_run() {
        let server = MockServer::start().await;
        mount_zone_list(&server, json!([])).await;

        Mock::given(method("POST"))
            .and(path("/api/config/v1/managementZones"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Constraints violated"))
            .expect(1)
            .mount(&server)
            .await;

        let client = DynatraceClient::new(DynatraceConfig::new(server.uri(), "token"));
        let teams = vec![team("first", &["a-"]), team("second", &["b-"])];

        let result = Reconciler::new(&client).run(&teams).await;

        match result {
            Err(CloudError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("Constraints violated"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_token_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/v1/managementZones"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = DynatraceClient::new(DynatraceConfig::new(server.uri(), "bad"));
        let result = Reconciler::new(&client).run(&[team("x", &[])]).await;

        assert!(matches!(result, Err(CloudError::AuthenticationFailed(_))));
    }
}
