//! The external referee: configuration, transport, and reading its rulings.
#[cfg(test)]
pub(crate) mod canned;
mod config;
mod gemini;
mod generator;
mod judge;
mod judgment;

pub use config::*;
pub use gemini::*;
pub use generator::*;
pub use judge::*;
pub use judgment::*;
