use super::{RemoteDevice, PING_TIMEOUT};

impl RemoteDevice {
    /// `GET {base}/ping`, returning the raw body text
    pub async fn ping(&self) -> reqwest::Result<String> {
        self.client
            .get(format!("{}/ping", self.base_url))
            .timeout(PING_TIMEOUT)
            .send()
            .await?
            .text()
            .await
    }
}
