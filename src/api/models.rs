use std::collections::HashSet;

use url::Url;

use crate::domain::{AppError, ResourceType};

/// Where the companion listens unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

pub const ENDPOINT_ENV: &str = "DOWNLOAD_RELAY_ENDPOINT";
pub const REQUEST_TYPES_ENV: &str = "DOWNLOAD_RELAY_REQUEST_TYPES";

/// Configuration for the relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: Url,
    /// Request classifications that produce a notification.
    pub request_types: HashSet<ResourceType>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            request_types: default_request_types(),
        }
    }
}

impl RelayConfig {
    /// Defaults overlaid with `DOWNLOAD_RELAY_ENDPOINT` and `DOWNLOAD_RELAY_REQUEST_TYPES`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENDPOINT_ENV) {
            config.endpoint = parse_endpoint(&raw)?;
        }

        if let Some(raw) = lookup(REQUEST_TYPES_ENV) {
            config.request_types = parse_request_types(&raw)?;
        }

        Ok(config)
    }
}

/// Generic data requests and top-level page loads.
pub fn default_request_types() -> HashSet<ResourceType> {
    [ResourceType::XmlHttpRequest, ResourceType::MainFrame]
        .into_iter()
        .collect()
}

pub fn parse_endpoint(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim()).map_err(|e| AppError::InvalidEndpoint(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidEndpoint(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}

pub fn parse_request_types(raw: &str) -> Result<HashSet<ResourceType>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            ResourceType::parse(name).ok_or_else(|| AppError::UnknownRequestType(name.to_string()))
        })
        .collect()
}
