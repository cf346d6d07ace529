use crate::{
    error::{Result, ZImageError},
    models::{BackendErrorBody, HealthStatus},
};
use reqwest::Client;

#[derive(Clone)]
pub struct HealthClient {
    client: Client,
    base_url: String,
}

impl HealthClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Probe the backend. `model_loaded: false` means the service is up
    /// but the pipeline failed to load; generation requests will be
    /// rejected with a 503 until it recovers.
    pub async fn check(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| {
                log::error!("Health check request failed: {}", e);
                ZImageError::RequestError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: BackendErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .detail
                .unwrap_or_else(|| "Health check failed".to_string());

            log::error!("Backend health check returned {}: {}", status, message);
            return Err(ZImageError::BackendError(message));
        }

        response.json::<HealthStatus>().await.map_err(|e| {
            log::error!("Failed to parse health response: {}", e);
            ZImageError::ResponseError(e.to_string())
        })
    }
}
