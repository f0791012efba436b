use serde::{Deserialize, Serialize};

use crate::value_objects::LocationLookup;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub request_timeout_seconds: Option<u64>,
    pub location_lookup: LocationLookup,
    pub log_dir: Option<String>,
}
