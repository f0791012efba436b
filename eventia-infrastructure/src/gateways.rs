pub mod http_events_gateway;

pub use http_events_gateway::*;
