//! The game loop and everything it prints.
mod display;
mod room;

pub use display::*;
pub use room::*;
