use crate::entities::Event;

/// Case-insensitive substring match on the event name. An empty term keeps everything.
pub fn filter_by_name(events: &[Event], term: &str) -> Vec<Event> {
    let term = term.to_lowercase();
    events
        .iter()
        .filter(|ev| ev.event_name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
