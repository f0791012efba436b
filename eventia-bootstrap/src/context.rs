use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use eventia_application::AppState;
use eventia_infrastructure::{ApiClient, AppConfig, HttpEventsGateway};

pub struct AppContext {
    pub state: AppState,
    pub client: ApiClient,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        info!(
            base_url = %runtime_config.base_url,
            api_token_set = runtime_config.api_token.is_some(),
            location_lookup = runtime_config.location_lookup.as_str(),
            request_timeout_seconds = ?runtime_config.request_timeout_seconds,
            "config loaded"
        );

        let client = ApiClient::new(&runtime_config)?;
        let gateway = Arc::new(HttpEventsGateway::new(client.clone(), &runtime_config));
        let state = AppState::new(runtime_config, gateway);

        Ok(Self { state, client })
    }
}
