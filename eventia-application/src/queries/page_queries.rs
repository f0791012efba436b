use tracing::{error, info};

use crate::{AppError, AppState};
use eventia_domain::{Event, EventView, FilterSet};

#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub events: Vec<Event>,
    pub filters: FilterSet,
}

/// Initial page: fetch the full list, render it and seed one chip per country.
pub async fn load_page(state: &AppState, view: &dyn EventView) -> Result<PageSnapshot, AppError> {
    view.show_loading();
    state.metrics.record_request();
    let events = state.gateway.list_events().await.map_err(|err| {
        error!("failed to load events: {:#}", err);
        state.metrics.record_error();
        AppError::Upstream(format!("{:#}", err))
    })?;

    view.clear();
    view.render_events(&events);
    state.metrics.record_render();

    let filters = FilterSet::seed_from_events(&events);
    info!(events = events.len(), countries = filters.filters().len(), "page loaded");
    Ok(PageSnapshot { events, filters })
}
