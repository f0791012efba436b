pub mod terminal_view;

pub use terminal_view::*;
