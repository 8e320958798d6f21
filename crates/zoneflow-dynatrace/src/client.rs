//! Dynatrace management zone API client
//!
//! Direct implementation of the configuration API v1 management zone
//! endpoints. Uses `Api-Token` authentication.

use crate::error::{DynatraceError, Result};
use serde::Deserialize;
use zoneflow_cloud::{ManagementZone, ZoneSummary};

const MANAGEMENT_ZONES_PATH: &str = "/api/config/v1/managementZones";

const ENV_API_TOKEN: &str = "DT_API_TOKEN";
const ENV_BASE_URL: &str = "DT_ENV_URL";

/// Dynatrace management zone client
pub struct DynatraceClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

/// Configuration for the Dynatrace client
#[derive(Clone)]
pub struct DynatraceConfig {
    /// Environment URL, e.g. `https://abc12345.live.dynatrace.com`
    pub base_url: String,
    pub api_token: String,
}

impl std::fmt::Debug for DynatraceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynatraceConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl DynatraceConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    /// Create DynatraceConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let api_token = required_env(ENV_API_TOKEN)?;
        let base_url = required_env(ENV_BASE_URL)?;

        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(DynatraceError::InvalidConfig(format!(
                "{} must start with https:// or http://, got '{}'",
                ENV_BASE_URL, base_url
            )));
        }

        Ok(Self::new(base_url, api_token))
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(DynatraceError::MissingEnvVar(name.to_string())),
    }
}

impl DynatraceClient {
    /// Create a new client
    pub fn new(config: DynatraceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token: config.api_token,
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn zones_url(&self) -> String {
        format!("{}{}", self.base_url, MANAGEMENT_ZONES_PATH)
    }

    fn zone_url(&self, id: &str) -> String {
        format!("{}/{}", self.zones_url(), id)
    }

    fn authorization(&self) -> String {
        format!("Api-Token {}", self.api_token)
    }

    /// List all management zones
    pub async fn list_zones(&self) -> Result<Vec<ZoneSummary>> {
        let url = self.zones_url();

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let response = ensure_success("GET", &url, response).await?;
        let body = response.text().await?;
        let list: ZoneList = serde_json::from_str(&body)?;

        Ok(list
            .values
            .into_iter()
            .map(|z| ZoneSummary {
                id: z.id,
                name: z.name,
            })
            .collect())
    }

    /// Create a new management zone
    pub async fn create_zone(&self, zone: &ManagementZone) -> Result<ZoneSummary> {
        let url = self.zones_url();

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(zone)
            .send()
            .await?;

        let response = ensure_success("POST", &url, response).await?;
        let body = response.text().await?;
        let created: ApiZoneStub = serde_json::from_str(&body)?;

        Ok(ZoneSummary {
            id: created.id,
            name: created.name,
        })
    }

    /// Replace a management zone's name and rules
    pub async fn update_zone(&self, id: &str, zone: &ManagementZone) -> Result<()> {
        let url = self.zone_url(id);

        let response = self
            .client
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .json(zone)
            .send()
            .await?;

        ensure_success("PUT", &url, response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the response body
async fn ensure_success(
    method: &str,
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DynatraceError::Api {
        method: method.to_string(),
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ZoneList {
    #[serde(default)]
    values: Vec<ApiZoneStub>,
}

#[derive(Debug, Deserialize)]
struct ApiZoneStub {
    id: String,
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zoneflow_cloud::MembershipRule;

    fn client_for(server: &MockServer) -> DynatraceClient {
        DynatraceClient::new(DynatraceConfig::new(server.uri(), "dt0c01.secret"))
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = DynatraceConfig::new("https://abc.live.dynatrace.com/", "t");
        assert_eq!(config.base_url, "https://abc.live.dynatrace.com");

        let client = DynatraceClient::new(config);
        assert_eq!(
            client.zone_url("-42"),
            "https://abc.live.dynatrace.com/api/config/v1/managementZones/-42"
        );
    }

    #[test]
    fn test_config_debug_hides_token() {
        let config = DynatraceConfig::new("https://abc.live.dynatrace.com", "dt0c01.secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("dt0c01.secret"));
        assert!(debug.contains("abc.live.dynatrace.com"));
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("DT_API_TOKEN", Some("dt0c01.token")),
                ("DT_ENV_URL", Some("https://abc.live.dynatrace.com/")),
            ],
            || {
                let config = DynatraceConfig::from_env().unwrap();
                assert_eq!(config.api_token, "dt0c01.token");
                assert_eq!(config.base_url, "https://abc.live.dynatrace.com");
            },
        );
    }

    #[test]
    fn test_config_from_env_missing_token() {
        temp_env::with_vars(
            [
                ("DT_API_TOKEN", None),
                ("DT_ENV_URL", Some("https://abc.live.dynatrace.com")),
            ],
            || match DynatraceConfig::from_env() {
                Err(DynatraceError::MissingEnvVar(name)) => assert_eq!(name, "DT_API_TOKEN"),
                other => panic!("Expected MissingEnvVar, got {:?}", other),
            },
        );
    }

    #[test]
    fn test_config_from_env_rejects_bare_host() {
        temp_env::with_vars(
            [
                ("DT_API_TOKEN", Some("t")),
                ("DT_ENV_URL", Some("abc.live.dynatrace.com")),
            ],
            || {
                assert!(matches!(
                    DynatraceConfig::from_env(),
                    Err(DynatraceError::InvalidConfig(_))
                ));
            },
        );
    }

    #[tokio::test]
    async fn test_list_zones() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/v1/managementZones"))
            .and(header("Authorization", "Api-Token dt0c01.secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": [
                    { "id": "-100", "name": "payments" },
                    { "id": "200", "name": "search" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let zones = client_for(&server).list_zones().await.unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "-100");
        assert_eq!(zones[1].name, "search");
    }

    #[tokio::test]
    async fn test_list_zones_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config/v1/managementZones"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Token Authentication failed"))
            .mount(&server)
            .await;

        match client_for(&server).list_zones().await {
            Err(DynatraceError::Api { status, body, .. }) => {
                assert_eq!(status, 401);
                assert!(body.contains("Token Authentication failed"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_zone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/config/v1/managementZones"))
            .and(header("Authorization", "Api-Token dt0c01.secret"))
            .and(body_json(json!({ "name": "web-team", "rules": [] })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "8675309",
                "name": "web-team"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server)
            .create_zone(&ManagementZone::empty("web-team"))
            .await
            .unwrap();

        assert_eq!(created.id, "8675309");
        assert_eq!(created.name, "web-team");
    }

    #[tokio::test]
    async fn test_update_zone() {
        let server = MockServer::start().await;
        let zone = ManagementZone::new("web-team", vec![MembershipRule::host_group_prefix("app-")]);

        Mock::given(method("PUT"))
            .and(path("/api/config/v1/managementZones/-4711"))
            .and(header("Authorization", "Api-Token dt0c01.secret"))
            .and(body_json(serde_json::to_value(&zone).unwrap()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).update_zone("-4711", &zone).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_zone_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/config/v1/managementZones/1"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"error":{"code":400}}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .update_zone("1", &ManagementZone::empty("x"))
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("PUT "));
        assert!(message.contains("returned 400"));
    }
}
