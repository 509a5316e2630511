//! Tests against a real Grafana server.
//!
//! Each scenario takes a [`LiveConfig`]. The config is only built when both
//! `GRAFANA_LIVE_URL` and `GRAFANA_LIVE_TOKEN` are set (the token must belong to
//! a server admin); otherwise the tests return without sending anything.

use grafana_client::{ClientConfig, GrafanaClient};
use grafana_core::query::TeamQuery;
use grafana_core::types::{ApiKeyForm, RoleType, TeamForm};

struct LiveConfig {
    base_url: String,
    token: String,
}

impl LiveConfig {
    fn from_env() -> Option<Self> {
        let base_url = std::env::var("GRAFANA_LIVE_URL").ok()?;
        let token = std::env::var("GRAFANA_LIVE_TOKEN").ok()?;
        Some(Self { base_url, token })
    }

    fn client(&self) -> GrafanaClient {
        let config = ClientConfig::new(&self.base_url)
            .unwrap()
            .with_token(self.token.as_str());
        GrafanaClient::new(&config).unwrap()
    }
}

fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

async fn team_lifecycle(live: &LiveConfig) {
    let client = live.client();
    let name = unique_name("live-team");

    let created = client
        .teams()
        .create(&TeamForm {
            name: name.clone(),
            email: String::new(),
        })
        .await
        .unwrap();

    let team = client.teams().get_by_id(created.team_id).await.unwrap();
    assert_eq!(team.name, name);

    let page = client
        .teams()
        .search(&TeamQuery {
            name: Some(name.clone()),
            ..TeamQuery::default()
        })
        .await
        .unwrap();
    assert!(page.teams.iter().any(|t| t.id == created.team_id));

    client.teams().delete(created.team_id).await.unwrap();
    let error = client.teams().get_by_id(created.team_id).await.unwrap_err();
    assert!(error.is_not_found());
}

async fn invalid_role_is_rejected(live: &LiveConfig) {
    let client = live.client();
    let error = client
        .rest()
        .post("/api/org/users")
        .json(&serde_json::json!({"loginOrEmail": "admin", "role": "admin"}))
        .execute()
        .await
        .unwrap_err();
    assert_eq!(error.status(), 400);
    assert!(!error.message().unwrap_or_default().is_empty());
}

async fn key_lifecycle(live: &LiveConfig) {
    let client = live.client();
    let name = unique_name("live-key");

    let created = client
        .keys()
        .create(&ApiKeyForm {
            name: name.clone(),
            role: RoleType::Viewer,
            seconds_to_live: Some(60),
        })
        .await
        .unwrap();
    assert_eq!(created.name, name);
    assert!(!created.key.is_empty());

    let keys = client.keys().list().await.unwrap();
    let key = keys.iter().find(|k| k.name == name).unwrap();
    client.keys().delete(key.id).await.unwrap();
}

#[tokio::test]
async fn test_live_team_lifecycle() {
    let Some(live) = LiveConfig::from_env() else {
        return;
    };
    team_lifecycle(&live).await;
}

#[tokio::test]
async fn test_live_invalid_role_is_rejected() {
    let Some(live) = LiveConfig::from_env() else {
        return;
    };
    invalid_role_is_rejected(&live).await;
}

#[tokio::test]
async fn test_live_key_lifecycle() {
    let Some(live) = LiveConfig::from_env() else {
        return;
    };
    key_lifecycle(&live).await;
}
