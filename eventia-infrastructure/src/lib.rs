pub mod config;
pub mod gateways;
pub mod http;

pub use config::*;
pub use gateways::*;
pub use http::*;
