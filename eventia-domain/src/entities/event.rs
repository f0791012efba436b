// Event entity
// An event listing as returned by the backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::LocationId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCountry {
    #[serde(rename = "_id")]
    pub id: LocationId,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventName")]
    pub event_name: String,
    /// Missing or null on some backend records; such events never match a country filter.
    #[serde(
        rename = "locationCountry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_country: Option<LocationCountry>,
    /// Remaining backend fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(
        event_name: impl Into<String>,
        location_id: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            location_country: Some(LocationCountry {
                id: LocationId(location_id.into()),
                country: country.into(),
            }),
            extra: Map::new(),
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.location_country.as_ref().map(|loc| loc.country.as_str())
    }

    pub fn location_id(&self) -> Option<&LocationId> {
        self.location_country.as_ref().map(|loc| &loc.id)
    }
}
