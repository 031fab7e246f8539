//! Text sent to the judge: fixed rules followed by the state of one round.
mod prompt;
mod rules;

pub use prompt::*;
pub use rules::*;
