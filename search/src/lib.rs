//! Delve Search: generic best-first state-space search.
//!
//! A caller implements [`SearchDomain`] for its state space, wraps it in a
//! [`SearchProblem`] with an initial and a goal state, and runs a
//! [`SearchTree`] under one of five [`Strategy`] variants. The tree returns
//! the root-to-goal path, the plan that produced it, and its cost.
//!
//! # Crate dependency graph
//!
//! ```text
//! delve_search  ←  delve_harness
//! (engine)          (worlds, snapshot adapter, target ranking)
//! ```
//!
//! # Key types
//!
//! - [`SearchDomain`]: the state-space contract
//! - [`SearchTree`]: arena-owned search tree and expansion loop
//! - [`SearchNode`]: one explored point, linked to its parent by index
//! - [`SearchPolicy`]: strategy plus optional depth limit
//! - [`SearchGraph`]: expansion-event audit log with a content digest

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;

pub use contract::{SearchDomain, SearchProblem};
pub use error::SearchError;
pub use graph::SearchGraph;
pub use node::{NodeId, SearchNode};
pub use policy::{SearchPolicy, Strategy};
pub use search::{solve, Outcome, SearchStats, SearchTree, Solution};
