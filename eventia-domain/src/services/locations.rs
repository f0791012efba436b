use crate::entities::Event;
use crate::value_objects::LocationId;

/// For every country in order, every event location id in that country.
/// Duplicates are kept as computed.
pub fn collect_location_ids(events: &[Event], countries: &[String]) -> Vec<LocationId> {
    let mut ids = Vec::new();
    for country in countries {
        for loc in events.iter().filter_map(|ev| ev.location_country.as_ref()) {
            if &loc.country == country {
                ids.push(loc.id.clone());
            }
        }
    }
    ids
}
