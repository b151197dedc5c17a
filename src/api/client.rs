use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::domain::DownloadNotification;

use super::models::RelayConfig;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Companion rejected notification with status {status}")]
    Rejected { status: StatusCode },

    #[error("Companion unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;

/// Thin client for the companion's notification endpoint.
#[derive(Clone)]
pub struct CompanionClient {
    client: Client,
    endpoint: Url,
}

impl CompanionClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Single POST of `notification`. Only the status code is looked at.
    pub async fn send(&self, notification: &DownloadNotification) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(notification)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected { status });
        }

        Ok(())
    }
}
