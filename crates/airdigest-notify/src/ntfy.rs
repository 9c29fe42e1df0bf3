//! ntfy push channel: one-shot POST of the digest text to a topic.

use airdigest_core::config::{DigestConfig, REQUEST_TIMEOUT_SECS};
use airdigest_core::error::{DigestError, Result};

/// Action buttons linking back to the two channel pages.
const ACTIONS: &str =
    "view, Channel 1, https://www.nts.live/1; view, Channel 2, https://www.nts.live/2";

/// ntfy notification channel bound to one server/topic pair.
pub struct NtfyNotifier {
    url: String,
    client: reqwest::Client,
}

impl NtfyNotifier {
    pub fn new(config: &DigestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DigestError::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: format!("{}/{}", config.server.trim_end_matches('/'), config.topic),
            client,
        })
    }

    /// POST a message to the topic. Single attempt, raw UTF-8 text body.
    pub async fn send(&self, message: &str, title: &str) -> Result<()> {
        tracing::info!("Sending notification to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("Title", title)
            .header("Priority", "default")
            .header("Tags", "radio,music")
            .header("Actions", ACTIONS)
            .body(message.to_string())
            .send()
            .await
            .map_err(|e| DigestError::dispatch(format!("send failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DigestError::dispatch(format!("ntfy {status}: {text}")));
        }

        Ok(())
    }

    /// Send and report the outcome as a bool. Failures are logged here and
    /// never propagate past this boundary.
    pub async fn dispatch(&self, message: &str, title: &str) -> bool {
        match self.send(message, title).await {
            Ok(()) => {
                tracing::info!("Notification sent successfully");
                true
            }
            Err(e) => {
                tracing::error!("Failed to send notification: {e}");
                false
            }
        }
    }
}
