//! World contract: a search domain with a stable identity.
//!
//! Worlds provide domain data only. Running searches, encoding the
//! expansion log and hashing it are runner concerns.

use delve_search::SearchDomain;

/// A [`SearchDomain`] the runner can label in its output.
pub trait SearchWorld: SearchDomain {
    /// Unique world identifier (e.g., `"points"`).
    fn world_id(&self) -> &str;
}
