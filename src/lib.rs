//! # League Engine
//!
//! Deterministic league standings and player-statistics reconciliation.
//! The engine is a pure function of the competition aggregate handed to it:
//! it performs no I/O of its own and every recompute replays the full match
//! history from scratch.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, players, matches, events)
//! - **normalize**: Name identity resolution via normalized keys
//! - **reconcile**: Player-statistic reconciliation from match history
//! - **standings**: League-table computation with points and form guide
//! - **scorers**: Cross-team top-scorer leaderboard
//! - **audit**: Ghost-name and duplicate-identity reports
//! - **storage**: Aggregate snapshot persistence
//! - **config**: Configuration loading and validation

pub mod audit;
pub mod config;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod scorers;
pub mod standings;
pub mod storage;

pub use models::*;
