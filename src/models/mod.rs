//! Core data models for the league engine.

mod ids;
mod matches;
mod player;
mod team;

pub use ids::*;
pub use matches::*;
pub use player::*;
pub use team::*;
