//! # Foundry Agents Client
//!
//! The thread/message/run surface of the Azure AI Foundry agents API behind
//! an async trait, so the fan-out runner can be exercised against a mock.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::agents::config::AgentsConfig;

const API_VERSION: &str = "v1";

/// A conversation thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub id: String,
}

/// Terminal and in-flight run states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Completed,
    Failed,
    Cancelled,
    Expired,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired
        )
    }
}

/// An agent run on a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub last_error: Option<serde_json::Value>,
}

/// One text block inside a message.
#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextContent>,
}

/// A message on a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

impl ThreadMessage {
    /// Concatenated text blocks of the message.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|c| c.kind == "text")
            .filter_map(|c| c.text.as_ref().map(|t| t.value.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct MessageList {
    data: Vec<ThreadMessage>,
}

/// The subset of the agents API the runner needs.
#[async_trait]
pub trait AgentsApi: Send + Sync {
    async fn create_thread(&self) -> Result<Thread>;
    async fn post_message(&self, thread_id: &str, role: &str, content: &str) -> Result<()>;
    async fn create_run(&self, thread_id: &str, agent_id: &str) -> Result<Run>;
    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;
    /// Messages on the thread in ascending order.
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>>;
}

/// reqwest-backed client for a Foundry project endpoint.
pub struct FoundryClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl FoundryClient {
    pub fn new(config: &AgentsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(300))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}?api-version={}", self.endpoint, path, API_VERSION)
    }
}

#[async_trait]
impl AgentsApi for FoundryClient {
    async fn create_thread(&self) -> Result<Thread> {
        let resp = self
            .http
            .post(self.url("threads"))
            .header("api-key", &self.api_key)
            .json(&json!({}))
            .send()
            .await
            .context("create_thread request failed")?
            .error_for_status()
            .context("create_thread returned an error status")?;
        Ok(resp.json().await?)
    }

    async fn post_message(&self, thread_id: &str, role: &str, content: &str) -> Result<()> {
        self.http
            .post(self.url(&format!("threads/{thread_id}/messages")))
            .header("api-key", &self.api_key)
            .json(&json!({ "role": role, "content": content }))
            .send()
            .await
            .context("post_message request failed")?
            .error_for_status()
            .context("post_message returned an error status")?;
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, agent_id: &str) -> Result<Run> {
        let resp = self
            .http
            .post(self.url(&format!("threads/{thread_id}/runs")))
            .header("api-key", &self.api_key)
            .json(&json!({ "assistant_id": agent_id }))
            .send()
            .await
            .context("create_run request failed")?
            .error_for_status()
            .context("create_run returned an error status")?;
        Ok(resp.json().await?)
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let resp = self
            .http
            .get(self.url(&format!("threads/{thread_id}/runs/{run_id}")))
            .header("api-key", &self.api_key)
            .send()
            .await
            .context("get_run request failed")?
            .error_for_status()
            .context("get_run returned an error status")?;
        Ok(resp.json().await?)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        let url = format!(
            "{}/threads/{thread_id}/messages?api-version={}&order=asc",
            self.endpoint, API_VERSION
        );
        let resp = self
            .http
            .get(url)
            .header("api-key", &self.api_key)
            .send()
            .await
            .context("list_messages request failed")?
            .error_for_status()
            .context("list_messages returned an error status")?;
        let list: MessageList = resp.json().await?;
        Ok(list.data)
    }
}

/// Create a run and poll it to a terminal state.
pub async fn run_to_completion(
    api: &dyn AgentsApi,
    thread_id: &str,
    agent_id: &str,
    poll_interval: Duration,
) -> Result<Run> {
    let mut run = api.create_run(thread_id, agent_id).await?;
    while !run.status.is_terminal() {
        debug!(run_id = %run.id, status = ?run.status, "polling run");
        tokio::time::sleep(poll_interval).await;
        run = api.get_run(thread_id, &run.id).await?;
    }
    if run.status == RunStatus::Failed {
        bail!(
            "run failed: {}",
            run.last_error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
    }
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_status_terminality() {
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(!RunStatus::Queued.is_terminal());
        assert!(!RunStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_message_text_joins_text_blocks() {
        let msg: ThreadMessage = serde_json::from_value(json!({
            "role": "assistant",
            "content": [
                { "type": "text", "text": { "value": "first" } },
                { "type": "image_file", "image_file": { "file_id": "f" } },
                { "type": "text", "text": { "value": "second" } },
            ],
        }))
        .unwrap();
        assert_eq!(msg.text(), "first\nsecond");
    }

    #[test]
    fn test_run_status_deserializes_snake_case() {
        let run: Run = serde_json::from_value(json!({
            "id": "run_1",
            "status": "in_progress",
        }))
        .unwrap();
        assert_eq!(run.status, RunStatus::InProgress);
    }
}
