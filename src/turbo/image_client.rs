use crate::{
    error::{Result, ZImageError},
    models::{BackendErrorBody, GenerationRequest, GenerationResponse, TurboGenerateResponse},
};
use reqwest::{header, Client};

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    base_url: String,
}

impl ImageClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Run one generation on the backend. A single POST with no retry,
    /// timeout or cancellation; a hung backend hangs the caller.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let request_json = serde_json::to_string(&request)
            .map_err(|e| ZImageError::SerializationError(e.to_string()))?;

        log::info!(
            "Generating {}x{} image in {} steps (seed {})",
            request.width,
            request.height,
            request.steps,
            request.seed
        );
        log::debug!("Generation request payload: {}", request_json);

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .header(header::CONTENT_TYPE, "application/json")
            .body(request_json)
            .send()
            .await
            .map_err(|e| {
                log::error!("Generation request failed: {}", e);
                ZImageError::RequestError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // The error body is best-effort; an unparsable one falls
            // back to the generic message.
            let body: BackendErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .detail
                .unwrap_or_else(|| "Generation failed".to_string());

            log::error!("Backend rejected generation ({}): {}", status, message);
            return Err(ZImageError::BackendError(message));
        }

        let body: TurboGenerateResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse generation response: {}", e);
            ZImageError::ResponseError(e.to_string())
        })?;

        let Some(image_base64) = body.image_base64 else {
            log::error!("Generation response is missing image_base64");
            return Err(ZImageError::ResponseError(
                "response missing image_base64".into(),
            ));
        };

        Ok(GenerationResponse { image_base64 })
    }

    /// Like [`generate`](Self::generate), but returns the image as a
    /// `data:image/png;base64,` URI ready to drop into an image source.
    pub async fn generate_data_uri(&self, request: GenerationRequest) -> Result<String> {
        let response = self.generate(request).await?;
        Ok(response.to_data_uri())
    }
}
