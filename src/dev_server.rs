use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{
    DEFAULT_DEV_SERVER_URL, DEV_SERVER_PROBE_TIMEOUT_MS, DEV_SERVER_RUNNING_STATUS,
    DEV_SERVER_STATUS_PATH,
};

#[async_trait]
pub trait DevServerProbe: Send + Sync {
    async fn is_dev_server_running(&self) -> bool;
}

/// Asks the packager's `/status` endpoint whether it is up.
#[derive(Debug, Clone)]
pub struct HttpDevServerProbe {
    client: reqwest::Client,
    status_url: Option<Url>,
}

impl HttpDevServerProbe {
    pub fn new(dev_server: &Url) -> Self {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(DEV_SERVER_PROBE_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|error| {
                tracing::warn!("failed to configure dev server client, using defaults: {error}");
                reqwest::Client::new()
            });
        Self {
            client,
            status_url: dev_server.join(DEV_SERVER_STATUS_PATH).ok(),
        }
    }
}

#[async_trait]
impl DevServerProbe for HttpDevServerProbe {
    async fn is_dev_server_running(&self) -> bool {
        let Some(status_url) = self.status_url.clone() else {
            return false;
        };

        let response = match self.client.get(status_url.clone()).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::debug!("dev server probe {status_url} failed: {error}");
                return false;
            }
        };
        if !response.status().is_success() {
            tracing::debug!(
                "dev server probe {status_url} returned {}",
                response.status()
            );
            return false;
        }

        match response.text().await {
            Ok(body) => body.contains(DEV_SERVER_RUNNING_STATUS),
            Err(error) => {
                tracing::debug!("failed to read dev server status body: {error}");
                false
            }
        }
    }
}

pub fn default_dev_server_url() -> Url {
    Url::parse(DEFAULT_DEV_SERVER_URL).expect("default dev server url is valid")
}

pub fn normalize_dev_server_url(raw: &str) -> Url {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default_dev_server_url();
    }

    match Url::parse(trimmed) {
        Ok(mut parsed)
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() =>
        {
            if !parsed.path().ends_with('/') {
                let path = format!("{}/", parsed.path());
                parsed.set_path(&path);
            }
            parsed
        }
        _ => default_dev_server_url(),
    }
}
