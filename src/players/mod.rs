//! The two sides of the table: the human's input source and the random bot.
mod human;
mod robot;

pub use human::*;
pub use robot::*;
