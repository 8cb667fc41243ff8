use serde_json::{json, Value};

use crate::{api::duration_json, log_debug};

use super::{RemoteDevice, WATER_TIMEOUT};

impl RemoteDevice {
    /// `POST {base}/water`; non-2xx answers count as failures.
    pub async fn water(&self, duration: f64) -> reqwest::Result<Value> {
        let url = format!("{}/water", self.base_url);
        log_debug!("posting to {} with duration={}", url, duration);

        let response = self.client
            .post(&url)
            .json(&json!({ "duration": duration_json(duration) }))
            .timeout(WATER_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        response.json::<Value>().await
    }
}
