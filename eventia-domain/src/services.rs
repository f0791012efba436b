pub mod locations;
pub mod search;

pub use locations::*;
pub use search::*;
