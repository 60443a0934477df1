//! # Agent Configuration
//!
//! Environment-driven settings for the Azure AI Foundry runner, plus the
//! explicit opt-in gate: no Azure traffic unless `ALLOW_AZURE=1` is set or a
//! `.allow_azure` marker file exists in the working directory.

use std::path::Path;

use anyhow::{Context, Result};

pub const DEFAULT_AGENT_ID_KAOZ: &str = "asst_72uzK1Yt2hsu2qVyt22NkMiO";
pub const DEFAULT_AGENT_ID_ORDER: &str = "asst_Pgb3ctXzbsv21gX2auBeEFZx";

/// Require explicit opt-in before any Azure usage.
pub fn azure_allowed() -> bool {
    if std::env::var("ALLOW_AZURE").map(|v| v == "1").unwrap_or(false) {
        return true;
    }
    Path::new(".allow_azure").exists()
}

/// Connection and agent identity settings.
#[derive(Debug, Clone)]
pub struct AgentsConfig {
    /// Azure AI Foundry project endpoint
    pub endpoint: String,
    /// API key; sent as the `api-key` header
    pub api_key: String,
    pub agent_id_kaoz: String,
    pub agent_id_order: String,
    pub max_parallel_agents: usize,
    pub batch_size: usize,
}

impl AgentsConfig {
    /// Load from the environment. `PROJECT_ENDPOINT` and `PROJECT_API_KEY`
    /// are required; everything else has defaults.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var("PROJECT_ENDPOINT").context("PROJECT_ENDPOINT env var not set")?;
        let api_key =
            std::env::var("PROJECT_API_KEY").context("PROJECT_API_KEY env var not set")?;
        Ok(Self {
            endpoint,
            api_key,
            agent_id_kaoz: std::env::var("AGENT_ID_KAOZ")
                .unwrap_or_else(|_| DEFAULT_AGENT_ID_KAOZ.to_string()),
            agent_id_order: std::env::var("AGENT_ID_ORDER")
                .unwrap_or_else(|_| DEFAULT_AGENT_ID_ORDER.to_string()),
            max_parallel_agents: env_usize("MAX_PARALLEL_AGENTS", 500),
            batch_size: env_usize("BATCH_SIZE", 100),
        })
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_usize_falls_back() {
        assert_eq!(env_usize("CATHEDRAL_TEST_UNSET_VAR", 42), 42);
    }
}
