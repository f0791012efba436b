use tracing::{debug, error, info};

use crate::{AppError, AppState};
use eventia_domain::{
    collect_location_ids, Event, EventView, FilterChip, FilterSet, Generation, LocationId,
};

/// Synchronous half of a chip click: the new filter state plus the refresh still to run.
#[derive(Debug, Clone)]
pub struct ChipClick {
    pub filters: FilterSet,
    pub chip: FilterChip,
    pub refresh: PendingRefresh,
}

#[derive(Debug, Clone)]
pub struct PendingRefresh {
    pub ticket: Generation,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Rendered {
        events: Vec<Event>,
        location_ids: Vec<LocationId>,
    },
    /// A newer click took over; nothing was rendered.
    Stale { ticket: Generation },
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub filters: FilterSet,
    pub chip: FilterChip,
    pub refresh: RefreshOutcome,
}

pub fn click_filter_chip(
    state: &AppState,
    filters: &FilterSet,
    chip: &FilterChip,
    view: &dyn EventView,
) -> ChipClick {
    view.clear();

    let toggle = filters.toggle(&chip.label);
    let chip = chip.toggled(toggle.toggled);
    let countries = toggle.filters.active_countries();

    view.show_loading();
    let ticket = state.generation.next();
    debug!(
        label = %chip.label,
        active = chip.active,
        toggled = toggle.toggled,
        ticket = ticket.0,
        "filter chip clicked"
    );

    ChipClick {
        filters: toggle.filters,
        chip,
        refresh: PendingRefresh { ticket, countries },
    }
}

impl PendingRefresh {
    pub async fn run(
        self,
        state: &AppState,
        view: &dyn EventView,
    ) -> Result<RefreshOutcome, AppError> {
        state.metrics.record_request();
        let events = state
            .gateway
            .list_events()
            .await
            .map_err(|err| upstream(state, "failed to fetch events", err))?;
        if let Some(stale) = self.discard_if_stale(state) {
            return Ok(stale);
        }

        if self.countries.is_empty() {
            view.render_events(&events);
            state.metrics.record_render();
            return Ok(RefreshOutcome::Rendered {
                events,
                location_ids: Vec::new(),
            });
        }

        let location_ids = collect_location_ids(&events, &self.countries);
        state.metrics.record_request();
        let filtered = state
            .gateway
            .list_events_by_locations(&location_ids)
            .await
            .map_err(|err| upstream(state, "failed to fetch events by location", err))?;
        if let Some(stale) = self.discard_if_stale(state) {
            return Ok(stale);
        }

        view.clear();
        view.render_events(&filtered);
        state.metrics.record_render();
        info!(
            countries = ?self.countries,
            location_ids = location_ids.len(),
            events = filtered.len(),
            "filtered events rendered"
        );
        Ok(RefreshOutcome::Rendered {
            events: filtered,
            location_ids,
        })
    }

    fn discard_if_stale(&self, state: &AppState) -> Option<RefreshOutcome> {
        if state.generation.is_current(self.ticket) {
            return None;
        }
        debug!(
            ticket = self.ticket.0,
            current = state.generation.current().0,
            "discarding stale response"
        );
        state.metrics.record_stale();
        Some(RefreshOutcome::Stale { ticket: self.ticket })
    }
}

pub async fn apply_filter_click(
    state: &AppState,
    filters: &FilterSet,
    chip: &FilterChip,
    view: &dyn EventView,
) -> Result<FilterOutcome, AppError> {
    let click = click_filter_chip(state, filters, chip, view);
    let refresh = click.refresh.run(state, view).await?;
    Ok(FilterOutcome {
        filters: click.filters,
        chip: click.chip,
        refresh,
    })
}

fn upstream(state: &AppState, context: &str, err: anyhow::Error) -> AppError {
    error!("{}: {:#}", context, err);
    state.metrics.record_error();
    AppError::Upstream(format!("{:#}", err))
}
