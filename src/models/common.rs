use serde::Deserialize;

/// Error body the backend attaches to non-2xx responses. FastAPI-style
/// services put the human-readable message under `detail`; anything
/// else deserializes to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct BackendErrorBody {
    pub detail: Option<String>,
}
