use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ok" && self.model_loaded
    }
}
