//! Moves, outcomes, and the scorekeeping that survives between rounds.
mod moves;
mod record;
mod state;
mod status;
mod winner;

pub use moves::*;
pub use record::*;
pub use state::*;
pub use status::*;
pub use winner::*;
