use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZImageError};

/// Parameters for one image generation. Every field is required; the
/// backend owns validation and defaulting.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub height: u32,
    pub width: u32,
    #[serde(rename = "num_inference_steps")]
    pub steps: u32,
    pub guidance_scale: f32,
    pub seed: i64,
    pub use_flash_attn_3: bool,
}

/// Raw `/generate` response body. `image_base64` is optional at the
/// wire level so a malformed success can be rejected with a clear
/// error instead of a serde one.
#[derive(Debug, Deserialize)]
pub struct TurboGenerateResponse {
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub image_base64: String, // Base64 encoded PNG
}

impl GenerationResponse {
    /// Render the image as a `data:` URI usable directly as an image
    /// source.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.image_base64)
    }

    /// Decode the payload into raw PNG bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.image_base64)
            .map_err(|e| ZImageError::ResponseError(format!("invalid base64 image data: {}", e)))
    }
}
