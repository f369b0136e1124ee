//! Lantern API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// API Client for Lantern
pub struct LanternClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFive {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub emotional_stability: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: String,
    pub primary_value_id: String,
    pub big_five: BigFive,
    pub element: String,
    pub current_form: String,
    pub total_xp: u64,
    pub unlocked_skills: Vec<String>,
    pub darkside_warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evolution {
    pub current_form: String,
    pub next_form: Option<String>,
    pub next_threshold: Option<u64>,
    pub xp_to_next: Option<u64>,
    pub eligible: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub monster: Option<Monster>,
    pub streak: u32,
    pub last_action_date: Option<String>,
    pub evolution: Option<Evolution>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogged {
    pub level: u8,
    pub streak: u32,
    pub xp_granted: u64,
    pub progression: Progression,
}

#[derive(Debug, Deserialize)]
pub struct CoreValue {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ValueFinding {
    pub name: String,
    pub confidence: u8,
    pub evidence: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAnalysis {
    pub primary_value: ValueFinding,
    pub secondary_value: ValueFinding,
    pub tertiary_value: ValueFinding,
    pub analysis: String,
}

/// `/api/analyze` answers 200 either with an analysis or with the raw reply
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Analysis(ValueAnalysis),
    Unparsed { error: String, raw: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub envy_responses: Vec<String>,
    pub rage_responses: Vec<String>,
    pub loss_responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl LanternClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let resp = self
            .authorized(builder)
            .send()
            .await
            .context("Failed to connect to Lantern API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            tracing::debug!("API error body: {}", message);
            bail!("API error ({}): {}", status, message);
        }

        resp.json().await.context("Failed to parse response")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: serde_json::Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);
        self.send(self.client.post(&url).json(&body)).await
    }

    pub async fn progression(&self) -> Result<Progression> {
        self.get("/api/monster").await
    }

    pub async fn summon(&self, element: &str, primary_value_id: &str) -> Result<Progression> {
        self.post(
            "/api/monster",
            json!({ "element": element, "primaryValueId": primary_value_id }),
        )
        .await
    }

    pub async fn log_action(&self, level: i64) -> Result<ActionLogged> {
        self.post("/api/monster/actions", json!({ "level": level }))
            .await
    }

    pub async fn grant_xp(&self, amount: i64) -> Result<Progression> {
        self.post("/api/monster/xp", json!({ "amount": amount }))
            .await
    }

    pub async fn unlock_skill(&self, skill_id: &str) -> Result<Progression> {
        self.post("/api/monster/skills", json!({ "skillId": skill_id }))
            .await
    }

    pub async fn add_warning(&self, warning: &str) -> Result<Progression> {
        self.post("/api/monster/warnings", json!({ "warning": warning }))
            .await
    }

    pub async fn evolve(&self) -> Result<Progression> {
        self.post("/api/monster/evolve", json!({})).await
    }

    pub async fn values(&self) -> Result<Vec<CoreValue>> {
        self.get("/api/values").await
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let body = serde_json::to_value(request).context("Failed to encode answers")?;
        self.post("/api/analyze", body).await
    }
}
