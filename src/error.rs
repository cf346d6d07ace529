use std::fmt;

#[derive(Debug)]
pub enum ZImageError {
    ConfigError(String),
    ClientError(String),
    RequestError(String),
    /// Failure reported by the backend itself (non-2xx status). The
    /// payload is the backend's `detail` message, shown to callers
    /// verbatim.
    BackendError(String),
    ResponseError(String),
    SerializationError(String),
}

impl fmt::Display for ZImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZImageError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ZImageError::ClientError(msg) => write!(f, "Client error: {}", msg),
            ZImageError::RequestError(msg) => write!(f, "Request error: {}", msg),
            ZImageError::BackendError(msg) => write!(f, "{}", msg),
            ZImageError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            ZImageError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ZImageError {}

pub type Result<T> = std::result::Result<T, ZImageError>;
