use async_trait::async_trait;

use crate::entities::Event;
use crate::value_objects::LocationId;

#[async_trait]
pub trait EventsGateway: Send + Sync {
    /// `GET /events`
    async fn list_events(&self) -> anyhow::Result<Vec<Event>>;
    /// Events whose location matches any of the ids. Order and duplicates are sent as given.
    async fn list_events_by_locations(&self, ids: &[LocationId]) -> anyhow::Result<Vec<Event>>;
}
