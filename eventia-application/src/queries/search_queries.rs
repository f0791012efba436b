use std::sync::Arc;

use tracing::debug;

use crate::{AppState, Metrics};
use eventia_domain::{filter_by_name, Event, EventView};

/// Live search over the event list captured at bind time.
/// Independent of any active country filter.
#[derive(Clone)]
pub struct SearchBinding {
    events: Arc<Vec<Event>>,
    metrics: Arc<Metrics>,
}

impl SearchBinding {
    pub fn bind(state: &AppState, events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(events),
            metrics: state.metrics.clone(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn on_input(&self, term: &str, view: &dyn EventView) -> Vec<Event> {
        let filtered = filter_by_name(&self.events, term);
        debug!(term, matched = filtered.len(), total = self.events.len(), "search input");
        view.clear();
        view.render_events(&filtered);
        self.metrics.record_render();
        filtered
    }
}
