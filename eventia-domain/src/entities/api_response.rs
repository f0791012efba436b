// Uniform wrapper around every backend call

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// No schema validation happens before this point.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.data)
    }
}
