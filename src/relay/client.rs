//! HTTP relay client

use super::traits::RelayClient;
use super::{ContactMessage, RelayResponse};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Endpoint of a relay running alongside the TUI
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8080/send";

/// The remote send must settle within this window
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts the form-encoded message to the mail relay and reads its JSON verdict
pub struct HttpRelayClient {
    url: String,
    client: reqwest::Client,
}

impl HttpRelayClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .user_agent(concat!("kravi-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, message: ContactMessage) -> Result<RelayResponse> {
        let response = self.client.post(&self.url).form(&message).send().await?;
        let status = response.status();

        // The relay answers { success, message } on every status it
        // generates itself; anything unreadable is a transport problem.
        match response.json::<RelayResponse>().await {
            Ok(reply) => Ok(reply),
            Err(err) if status.is_success() => Err(err.into()),
            Err(_) => anyhow::bail!("relay returned {status} with an unreadable body"),
        }
    }
}
