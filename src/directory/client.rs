use super::{DirectoryService, TaskRecord};
use crate::config::DirectoryConfig;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the task directory.
///
/// - `GET  {base}/chat/task?name=..` returns a [`TaskRecord`]
/// - `POST {base}/chat/task?name=..&task=..&amount=..&initialAmount=..[&location=..]`
pub struct HttpDirectoryClient {
    http_client: Client,
    base_url: String,
}

impl HttpDirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        Self::build(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Create a client with a custom base URL (for testing with a mock server).
    pub fn with_base_url(base_url: String) -> Result<Self> {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent("slayer-tracker/1.0")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn task_url(&self) -> String {
        format!("{}/chat/task", self.base_url)
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryClient {
    async fn get_task(&self, player: &str) -> Result<TaskRecord> {
        let response = self
            .http_client
            .get(self.task_url())
            .query(&[("name", player)])
            .send()
            .await
            .context("Failed to send task lookup request")?;

        check_response_status(&response)?;
        response
            .json::<TaskRecord>()
            .await
            .context("Failed to parse task lookup response")
    }

    async fn submit_task(
        &self,
        player: &str,
        task: &str,
        amount: u32,
        initial_amount: u32,
        location: Option<&str>,
    ) -> Result<()> {
        let mut query = vec![
            ("name", player.to_string()),
            ("task", task.to_string()),
            ("amount", amount.to_string()),
            ("initialAmount", initial_amount.to_string()),
        ];
        if let Some(location) = location {
            query.push(("location", location.to_string()));
        }

        let response = self
            .http_client
            .post(self.task_url())
            .query(&query)
            .send()
            .await
            .context("Failed to send task submission")?;

        check_response_status(&response)
    }
}

fn check_response_status(response: &reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(anyhow!("Task directory error: {}", status))
    }
}
