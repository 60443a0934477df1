//! # Agent Swarm Runner
//!
//! Fan-out over N independent agent runs: chunk the context, post it in
//! batches with bounded exponential-backoff retries, run each agent to
//! completion, and aggregate per-agent metrics. Failures are captured per
//! task (`success = false`) and never abort the rest of the swarm.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::agents::client::{run_to_completion, AgentsApi};

/// Tuning knobs for the runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub max_parallel_agents: usize,
    pub batch_size: usize,
    pub chunk_size: usize,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub poll_interval: Duration,
    /// Where `<label>_response.txt` files land; `None` keeps responses in
    /// memory only.
    pub out_dir: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_parallel_agents: 500,
            batch_size: 100,
            chunk_size: 12_000,
            max_retries: 5,
            retry_delay: Duration::from_secs(1),
            poll_interval: Duration::from_secs(1),
            out_dir: None,
        }
    }
}

/// One agent to run: a display label and its Foundry agent id.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub label: String,
    pub agent_id: String,
}

/// Per-agent performance record.
#[derive(Debug, Clone, Serialize)]
pub struct AgentMetrics {
    pub label: String,
    pub duration_secs: f64,
    pub messages_sent: u32,
    pub messages_received: u32,
    pub chunks_processed: u32,
    pub retries: u32,
    pub success: bool,
    pub error: Option<String>,
}

/// Aggregate of a swarm run.
#[derive(Debug, Clone, Serialize)]
pub struct SwarmSummary {
    pub timestamp: String,
    pub total_agents: usize,
    pub successful_agents: usize,
    pub failed_agents: usize,
    pub total_messages_sent: u32,
    pub total_messages_received: u32,
    pub total_chunks_processed: u32,
    pub total_retries: u32,
    pub average_duration_secs: f64,
    pub agents: Vec<AgentMetrics>,
}

/// Split text into chunks of at most `max_len` characters.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_len.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

/// Run a single agent end to end. Never returns Err; failures are recorded
/// in the metrics.
pub async fn run_agent(
    api: &dyn AgentsApi,
    spec: &AgentSpec,
    content: &str,
    config: &RunnerConfig,
) -> AgentMetrics {
    let started = Instant::now();
    let mut metrics = AgentMetrics {
        label: spec.label.clone(),
        duration_secs: 0.0,
        messages_sent: 0,
        messages_received: 0,
        chunks_processed: 0,
        retries: 0,
        success: false,
        error: None,
    };

    match drive_agent(api, spec, content, config, &mut metrics).await {
        Ok(()) => {
            metrics.success = true;
            info!(label = %spec.label, "agent completed");
        }
        Err(err) => {
            metrics.error = Some(format!("{err:#}"));
            warn!(label = %spec.label, error = %err, "agent failed");
        }
    }
    metrics.duration_secs = started.elapsed().as_secs_f64();
    metrics
}

async fn drive_agent(
    api: &dyn AgentsApi,
    spec: &AgentSpec,
    content: &str,
    config: &RunnerConfig,
    metrics: &mut AgentMetrics,
) -> Result<()> {
    info!(label = %spec.label, "creating thread");
    let thread = api.create_thread().await?;

    let chunks = chunk_text(content, config.chunk_size);
    for (batch_num, batch) in chunks.chunks(config.batch_size.max(1)).enumerate() {
        send_batch(api, &thread.id, batch, batch_num, config, metrics).await?;
    }

    info!(label = %spec.label, thread = %thread.id, "running agent");
    run_to_completion(api, &thread.id, &spec.agent_id, config.poll_interval).await?;

    let messages = api.list_messages(&thread.id).await?;
    metrics.messages_received = messages.len() as u32;

    if let Some(dir) = &config.out_dir {
        let lines: Vec<String> = messages
            .iter()
            .map(|msg| format!("[{}] {}", msg.role, msg.text()))
            .collect();
        tokio::fs::create_dir_all(dir).await?;
        let out_file = dir.join(format!("{}_response.txt", spec.label.to_lowercase()));
        tokio::fs::write(&out_file, lines.join("\n\n"))
            .await
            .with_context(|| format!("failed to write {}", out_file.display()))?;
        info!(label = %spec.label, file = %out_file.display(), "saved response");
    }
    Ok(())
}

/// Post one batch of chunks, retrying the whole batch with exponential
/// backoff.
async fn send_batch(
    api: &dyn AgentsApi,
    thread_id: &str,
    batch: &[String],
    batch_num: usize,
    config: &RunnerConfig,
    metrics: &mut AgentMetrics,
) -> Result<()> {
    let mut attempt = 0;
    loop {
        match post_chunks(api, thread_id, batch, batch_num, metrics).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                metrics.retries += 1;
                attempt += 1;
                if attempt >= config.max_retries {
                    return Err(err);
                }
                let delay = config.retry_delay * 2u32.pow(attempt - 1);
                warn!(batch = batch_num, attempt, "batch send failed, backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

async fn post_chunks(
    api: &dyn AgentsApi,
    thread_id: &str,
    batch: &[String],
    batch_num: usize,
    metrics: &mut AgentMetrics,
) -> Result<()> {
    for (i, chunk) in batch.iter().enumerate() {
        let content = format!("[BATCH {} CHUNK {}]\n\n{}", batch_num, i + 1, chunk);
        api.post_message(thread_id, "user", &content).await?;
        metrics.messages_sent += 1;
        metrics.chunks_processed += 1;
    }
    Ok(())
}

/// Launch the full swarm, bounded by `max_parallel_agents`.
pub async fn run_swarm(
    api: Arc<dyn AgentsApi>,
    specs: Vec<AgentSpec>,
    content: Arc<String>,
    config: Arc<RunnerConfig>,
) -> SwarmSummary {
    info!(agents = specs.len(), "launching swarm");
    let semaphore = Arc::new(Semaphore::new(config.max_parallel_agents.max(1)));
    let mut join_set = JoinSet::new();
    for spec in specs {
        let api = Arc::clone(&api);
        let content = Arc::clone(&content);
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);
        join_set.spawn(async move {
            // a closed semaphore only happens on shutdown
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            run_agent(api.as_ref(), &spec, &content, &config).await
        });
    }

    let mut agents = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(metrics) => agents.push(metrics),
            Err(err) => warn!(error = %err, "agent task panicked"),
        }
    }
    agents.sort_by(|a, b| a.label.cmp(&b.label));
    summarize(agents)
}

fn summarize(agents: Vec<AgentMetrics>) -> SwarmSummary {
    let successful = agents.iter().filter(|m| m.success).count();
    let total_duration: f64 = agents.iter().map(|m| m.duration_secs).sum();
    SwarmSummary {
        timestamp: Utc::now().to_rfc3339(),
        total_agents: agents.len(),
        successful_agents: successful,
        failed_agents: agents.len() - successful,
        total_messages_sent: agents.iter().map(|m| m.messages_sent).sum(),
        total_messages_received: agents.iter().map(|m| m.messages_received).sum(),
        total_chunks_processed: agents.iter().map(|m| m.chunks_processed).sum(),
        total_retries: agents.iter().map(|m| m.retries).sum(),
        average_duration_secs: if agents.is_empty() {
            0.0
        } else {
            total_duration / agents.len() as f64
        },
        agents,
    }
}

/// Write the swarm summary as `metrics.json`.
pub fn save_metrics(summary: &SwarmSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(summary)?)
        .with_context(|| format!("failed to write metrics to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::client::{Run, RunStatus, Thread, ThreadMessage};
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock that records calls and fails on demand.
    struct MockApi {
        threads_created: AtomicUsize,
        messages: Mutex<Vec<String>>,
        fail_runs: bool,
    }

    impl MockApi {
        fn new(fail_runs: bool) -> Self {
            Self {
                threads_created: AtomicUsize::new(0),
                messages: Mutex::new(Vec::new()),
                fail_runs,
            }
        }
    }

    #[async_trait]
    impl AgentsApi for MockApi {
        async fn create_thread(&self) -> Result<Thread> {
            let n = self.threads_created.fetch_add(1, Ordering::SeqCst);
            Ok(Thread { id: format!("thread_{n}") })
        }

        async fn post_message(&self, _thread_id: &str, _role: &str, content: &str) -> Result<()> {
            self.messages.lock().unwrap().push(content.to_string());
            Ok(())
        }

        async fn create_run(&self, thread_id: &str, _agent_id: &str) -> Result<Run> {
            if self.fail_runs {
                bail!("run rejected");
            }
            Ok(Run {
                id: format!("run_for_{thread_id}"),
                status: RunStatus::Completed,
                last_error: None,
            })
        }

        async fn get_run(&self, _thread_id: &str, run_id: &str) -> Result<Run> {
            Ok(Run { id: run_id.to_string(), status: RunStatus::Completed, last_error: None })
        }

        async fn list_messages(&self, _thread_id: &str) -> Result<Vec<ThreadMessage>> {
            Ok(vec![serde_json::from_value(serde_json::json!({
                "role": "assistant",
                "content": [{ "type": "text", "text": { "value": "done" } }],
            }))
            .unwrap()])
        }
    }

    fn specs(n: usize) -> Vec<AgentSpec> {
        (0..n)
            .map(|i| AgentSpec { label: format!("KAOZ_{i}"), agent_id: "asst_test".into() })
            .collect()
    }

    #[test]
    fn test_chunk_text_short_input() {
        assert_eq!(chunk_text("hello", 100), vec!["hello".to_string()]);
    }

    #[test]
    fn test_chunk_text_splits_evenly() {
        let text = "a".repeat(25_000);
        let chunks = chunk_text(&text, 12_000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 12_000);
        assert_eq!(chunks[2].len(), 1_000);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_chunk_text_respects_char_boundaries() {
        let text = "ü".repeat(10);
        let chunks = chunk_text(&text, 3);
        assert_eq!(chunks.concat(), text);
    }

    #[tokio::test]
    async fn test_swarm_issues_one_thread_per_agent() {
        let api = Arc::new(MockApi::new(false));
        let summary = run_swarm(
            api.clone(),
            specs(5),
            Arc::new("context".to_string()),
            Arc::new(RunnerConfig::default()),
        )
        .await;
        assert_eq!(api.threads_created.load(Ordering::SeqCst), 5);
        assert_eq!(summary.total_agents, 5);
        assert_eq!(summary.successful_agents, 5);
        assert_eq!(summary.failed_agents, 0);
        // one chunk posted per agent
        assert_eq!(summary.total_messages_sent, 5);
        assert_eq!(summary.total_messages_received, 5);
    }

    #[tokio::test]
    async fn test_failed_runs_recorded_not_propagated() {
        let api = Arc::new(MockApi::new(true));
        let summary = run_swarm(
            api,
            specs(3),
            Arc::new("context".to_string()),
            Arc::new(RunnerConfig::default()),
        )
        .await;
        assert_eq!(summary.total_agents, 3);
        assert_eq!(summary.successful_agents, 0);
        assert_eq!(summary.failed_agents, 3);
        assert!(summary.agents.iter().all(|m| m.error.is_some()));
    }

    #[tokio::test]
    async fn test_large_context_batches_chunks() {
        let api = Arc::new(MockApi::new(false));
        let config = RunnerConfig { chunk_size: 10, batch_size: 2, ..Default::default() };
        let metrics = run_agent(
            api.as_ref(),
            &specs(1)[0],
            &"x".repeat(45),
            &config,
        )
        .await;
        assert!(metrics.success);
        assert_eq!(metrics.chunks_processed, 5);
        let messages = api.messages.lock().unwrap();
        assert_eq!(messages.len(), 5);
        assert!(messages[0].starts_with("[BATCH 0 CHUNK 1]"));
        assert!(messages[4].starts_with("[BATCH 2 CHUNK 1]"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = summarize(vec![
            AgentMetrics {
                label: "a".into(),
                duration_secs: 1.0,
                messages_sent: 2,
                messages_received: 1,
                chunks_processed: 2,
                retries: 0,
                success: true,
                error: None,
            },
            AgentMetrics {
                label: "b".into(),
                duration_secs: 3.0,
                messages_sent: 4,
                messages_received: 0,
                chunks_processed: 4,
                retries: 2,
                success: false,
                error: Some("boom".into()),
            },
        ]);
        assert_eq!(summary.total_agents, 2);
        assert_eq!(summary.successful_agents, 1);
        assert_eq!(summary.failed_agents, 1);
        assert_eq!(summary.total_messages_sent, 6);
        assert_eq!(summary.total_retries, 2);
        assert!((summary.average_duration_secs - 2.0).abs() < 1e-9);
    }
}
