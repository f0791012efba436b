// Country filter state
// A FilterSet is a value: toggling returns a new set instead of mutating shared state.

use serde::{Deserialize, Serialize};

use super::event::Event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub country: String,
    pub activated: bool,
}

impl Filter {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            activated: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

/// Result of toggling one country across a filter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToggle {
    pub filters: FilterSet,
    /// How many entries matched the label.
    pub toggled: usize,
}

impl FilterSet {
    /// Keeps the entries exactly as given, duplicates included.
    pub fn from_filters(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// One inactive filter per distinct country, in first-seen order.
    pub fn seed_from_events(events: &[Event]) -> Self {
        let mut filters: Vec<Filter> = Vec::new();
        for country in events.iter().filter_map(Event::country) {
            if !filters.iter().any(|f| f.country == country) {
                filters.push(Filter::new(country));
            }
        }
        Self { filters }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn toggle(&self, country: &str) -> FilterToggle {
        let mut toggled = 0;
        let filters = self
            .filters
            .iter()
            .map(|filter| {
                if filter.country == country {
                    toggled += 1;
                    Filter {
                        country: filter.country.clone(),
                        activated: !filter.activated,
                    }
                } else {
                    filter.clone()
                }
            })
            .collect();
        FilterToggle {
            filters: Self { filters },
            toggled,
        }
    }

    pub fn active_countries(&self) -> Vec<String> {
        self.filters
            .iter()
            .filter(|f| f.activated)
            .map(|f| f.country.clone())
            .collect()
    }
}

/// A clickable country chip and its visual state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub label: String,
    pub active: bool,
}

impl FilterChip {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    /// Flips the active state once per toggle applied.
    pub fn toggled(&self, times: usize) -> Self {
        Self {
            label: self.label.clone(),
            active: self.active ^ (times % 2 == 1),
        }
    }

    pub fn for_filters(filters: &FilterSet) -> Vec<FilterChip> {
        filters
            .filters()
            .iter()
            .map(|f| FilterChip {
                label: f.country.clone(),
                active: f.activated,
            })
            .collect()
    }
}
