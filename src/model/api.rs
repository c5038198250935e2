use serde::{Deserialize, Serialize};

/// Error body carried by non-2xx responses.
#[derive(Serialize, Deserialize, Default)]
pub struct ErrorDto {
    #[serde(default)]
    pub message: Option<String>,
}
