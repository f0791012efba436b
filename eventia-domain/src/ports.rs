// Gateway and View Port Traits (Interfaces)
// Define what the domain needs from infrastructure and the rendering surface

pub mod gateways;
pub mod views;

pub use gateways::*;
pub use views::*;
