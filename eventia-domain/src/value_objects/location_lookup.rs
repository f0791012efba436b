// How location ids are sent to the backend

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationLookup {
    /// `/events/location/<id>,<id>` with each id percent-encoded.
    #[default]
    Path,
    /// `/events/location?ids=<id>&ids=<id>`
    Query,
}

#[derive(Debug, Error)]
#[error("unknown location lookup '{0}', expected 'path' or 'query'")]
pub struct UnknownLocationLookup(pub String);

impl LocationLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationLookup::Path => "path",
            LocationLookup::Query => "query",
        }
    }
}

impl FromStr for LocationLookup {
    type Err = UnknownLocationLookup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "path" => Ok(LocationLookup::Path),
            "query" => Ok(LocationLookup::Query),
            other => Err(UnknownLocationLookup(other.to_string())),
        }
    }
}
