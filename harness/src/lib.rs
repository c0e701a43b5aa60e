//! Delve Harness: worlds and game-facing tooling around the search engine.
//!
//! Worlds implement [`delve_search::SearchDomain`] and provide domain data
//! only. The runner executes one search and packages the result with the
//! digest of its expansion log. The snapshot adapter and target ranking
//! turn a per-turn game state into "which enemy is cheapest to reach".
//!
//! The harness does NOT implement search logic; it delegates to
//! `delve_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod runner;
pub mod snapshot;
pub mod targeting;
pub mod worlds;
