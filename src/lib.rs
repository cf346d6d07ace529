pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod turbo;

pub use config::ZImageConfig;
pub use error::{Result, ZImageError};
pub use models::{GenerationRequest, GenerationResponse, HealthStatus};
pub use turbo::{HealthClient, ImageClient, ZImageClient};
