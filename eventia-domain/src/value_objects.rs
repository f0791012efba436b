// Domain value objects
pub mod identifiers;
pub mod location_lookup;

pub use identifiers::*;
pub use location_lookup::*;
