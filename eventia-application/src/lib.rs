// Eventia Application Layer

pub mod commands;
pub mod error;
pub mod generation;
pub mod metrics;
pub mod queries;
pub mod state;

pub use error::AppError;
pub use generation::RequestGeneration;
pub use metrics::Metrics;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod testing;
