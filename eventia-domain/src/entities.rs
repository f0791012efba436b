// Domain entities
pub mod api_response;
pub mod event;
pub mod filter;
pub mod runtime_config;

pub use api_response::*;
pub use event::*;
pub use filter::*;
pub use runtime_config::*;
