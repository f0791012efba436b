use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use eventia_application::commands::filter_commands::{self, RefreshOutcome};
use eventia_application::queries::page_queries;
use eventia_application::queries::search_queries::SearchBinding;
use eventia_application::AppState;
use eventia_domain::{EventView, FilterChip, FilterSet};

use crate::error::TerminalError;
use crate::routes::{UiCommand, HELP};
use crate::views::ChipView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One browsing session: the loaded page, its search binding and the current filter state.
pub struct Session<V> {
    state: AppState,
    view: Arc<V>,
    search: SearchBinding,
    filters: FilterSet,
    chips: Vec<FilterChip>,
    refreshes: Vec<JoinHandle<()>>,
}

impl<V> Session<V>
where
    V: EventView + ChipView + 'static,
{
    pub async fn start(state: AppState, view: Arc<V>) -> Result<Self, TerminalError> {
        let page = page_queries::load_page(&state, view.as_ref()).await?;
        let search = SearchBinding::bind(&state, page.events);
        let chips = FilterChip::for_filters(&page.filters);
        Ok(Self {
            state,
            view,
            search,
            filters: page.filters,
            chips,
            refreshes: Vec::new(),
        })
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn chips(&self) -> &[FilterChip] {
        &self.chips
    }

    pub async fn handle(&mut self, command: UiCommand) -> Result<Flow, TerminalError> {
        match command {
            UiCommand::Search(term) => {
                self.search.on_input(&term, self.view.as_ref());
            }
            UiCommand::Click(label) => self.click(&label)?,
            UiCommand::Chips => self.view.render_chips(&self.chips),
            UiCommand::Reload => self.reload().await?,
            UiCommand::Help => self.view.show_message(HELP),
            UiCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Toggles synchronously, then lets the refresh run in the background so a later
    /// click can supersede it.
    fn click(&mut self, label: &str) -> Result<(), TerminalError> {
        let Some(index) = self.chips.iter().position(|chip| chip.label == label) else {
            return Err(TerminalError::Usage(format!("no filter chip named '{}'", label)));
        };

        let click = filter_commands::click_filter_chip(
            &self.state,
            &self.filters,
            &self.chips[index],
            self.view.as_ref(),
        );
        self.filters = click.filters;
        self.chips[index] = click.chip;

        let state = self.state.clone();
        let view = self.view.clone();
        let refresh = click.refresh;
        self.refreshes.retain(|handle| !handle.is_finished());
        self.refreshes.push(tokio::spawn(async move {
            match refresh.run(&state, view.as_ref()).await {
                Ok(RefreshOutcome::Rendered { events, .. }) => {
                    debug!(events = events.len(), "filter refresh rendered");
                }
                Ok(RefreshOutcome::Stale { ticket }) => {
                    debug!(ticket = ticket.0, "filter refresh superseded");
                }
                Err(err) => {
                    let err = TerminalError::from(err);
                    warn!("filter refresh failed: {}", err);
                    view.show_message(&err.to_string());
                }
            }
        }));
        Ok(())
    }

    async fn reload(&mut self) -> Result<(), TerminalError> {
        self.drain().await;
        let page = page_queries::load_page(&self.state, self.view.as_ref()).await?;
        self.search = SearchBinding::bind(&self.state, page.events);
        self.chips = FilterChip::for_filters(&page.filters);
        self.filters = page.filters;
        Ok(())
    }

    /// Waits for every in-flight filter refresh.
    pub async fn drain(&mut self) {
        for handle in self.refreshes.drain(..) {
            if let Err(err) = handle.await {
                warn!("filter refresh task aborted: {}", err);
            }
        }
    }
}
