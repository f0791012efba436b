use std::sync::Mutex;

use async_trait::async_trait;
use eventia_domain::{Event, EventView, EventsGateway, LocationId, LocationLookup, RuntimeConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListEvents,
    ByLocations(Vec<String>),
}

#[derive(Default)]
pub struct FakeGateway {
    pub events: Vec<Event>,
    pub fail: bool,
    pub calls: Mutex<Vec<GatewayCall>>,
}

impl FakeGateway {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventsGateway for FakeGateway {
    async fn list_events(&self) -> anyhow::Result<Vec<Event>> {
        self.calls.lock().unwrap().push(GatewayCall::ListEvents);
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(self.events.clone())
    }

    async fn list_events_by_locations(&self, ids: &[LocationId]) -> anyhow::Result<Vec<Event>> {
        self.calls.lock().unwrap().push(GatewayCall::ByLocations(
            ids.iter().map(|id| id.as_str().to_string()).collect(),
        ));
        Ok(self
            .events
            .iter()
            .filter(|ev| ev.location_id().is_some_and(|id| ids.contains(id)))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    Clear,
    Loading,
    Render(Vec<String>),
}

#[derive(Default)]
pub struct RecordingView {
    pub ops: Mutex<Vec<ViewOp>>,
}

impl RecordingView {
    pub fn ops(&self) -> Vec<ViewOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl EventView for RecordingView {
    fn clear(&self) {
        self.ops.lock().unwrap().push(ViewOp::Clear);
    }

    fn show_loading(&self) {
        self.ops.lock().unwrap().push(ViewOp::Loading);
    }

    fn render_events(&self, events: &[Event]) {
        self.ops.lock().unwrap().push(ViewOp::Render(
            events.iter().map(|ev| ev.event_name.clone()).collect(),
        ));
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        base_url: "http://localhost".to_string(),
        api_token: None,
        request_timeout_seconds: None,
        location_lookup: LocationLookup::Path,
        log_dir: None,
    }
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new("Jazz Night", "1", "France"),
        Event::new("Tech Meetup", "2", "Spain"),
    ]
}
