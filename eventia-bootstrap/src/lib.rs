pub mod context;
pub mod lifecycle;
pub mod logging;

pub use lifecycle::{run_browse, run_filter, run_request, run_search, RawRequest};
