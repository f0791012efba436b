use std::sync::Arc;

use eventia_domain::ports::EventsGateway;
use eventia_domain::RuntimeConfig;

use crate::{Metrics, RequestGeneration};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub gateway: Arc<dyn EventsGateway>,
    pub generation: Arc<RequestGeneration>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, gateway: Arc<dyn EventsGateway>) -> Self {
        Self {
            config,
            gateway,
            generation: Arc::new(RequestGeneration::default()),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
