pub mod health_client;
pub mod image_client;

use crate::{
    config::ZImageConfig,
    error::{Result, ZImageError},
};
use reqwest::Client;

pub use health_client::HealthClient;
pub use image_client::ImageClient;

#[derive(Clone)]
pub struct ZImageClient {
    image_client: ImageClient,
    health_client: HealthClient,
}

impl ZImageClient {
    pub fn new(config: ZImageConfig) -> Result<Self> {
        let base_url = config.resolved_base_url();
        if base_url.is_empty() {
            return Err(ZImageError::ConfigError(
                "backend base URL is empty".into(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ZImageError::ClientError(e.to_string()))?;

        Ok(Self {
            image_client: ImageClient::new(client.clone(), base_url.clone()),
            health_client: HealthClient::new(client, base_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn health(&self) -> &HealthClient {
        &self.health_client
    }
}
