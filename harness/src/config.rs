//! Targeting configuration.
//!
//! [`TargetingConfigInput`] is the on-disk JSON form: every field is
//! optional and falls back to the defaults below. [`TargetingConfig`] is
//! the resolved form the ranking code consumes.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use delve_search::{SearchError, SearchPolicy, Strategy};

use crate::worlds::points::Metric;

/// Strategy used when the input names none.
const DEFAULT_STRATEGY: Strategy = Strategy::AStar;

/// Optional overrides, as read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetingConfigInput {
    /// Strategy tag (`"a*"`, `"uniform"`, ...). `None` uses A*.
    pub strategy: Option<String>,
    /// `None` leaves the search unbounded.
    pub depth_limit: Option<u32>,
    /// `None` uses Euclidean.
    pub metric: Option<Metric>,
    /// Rank enemies that are traversing earth. `None` is `false`.
    pub include_traversing: Option<bool>,
}

/// Resolved targeting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetingConfig {
    pub policy: SearchPolicy,
    pub metric: Metric,
    pub include_traversing: bool,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::new(DEFAULT_STRATEGY),
            metric: Metric::default(),
            include_traversing: false,
        }
    }
}

/// Failure loading a targeting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// The text is not a valid configuration object.
    Json { detail: String },
    /// The strategy tag is not recognised.
    Strategy(SearchError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read config {path}: {detail}"),
            Self::Json { detail } => write!(f, "malformed config: {detail}"),
            Self::Strategy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<SearchError> for ConfigError {
    fn from(e: SearchError) -> Self {
        Self::Strategy(e)
    }
}

impl TargetingConfig {
    /// Resolve an input against the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Strategy`] for an unknown strategy tag.
    pub fn from_input(input: &TargetingConfigInput) -> Result<Self, ConfigError> {
        let strategy = match &input.strategy {
            Some(tag) => tag.parse()?,
            None => DEFAULT_STRATEGY,
        };
        Ok(Self {
            policy: SearchPolicy {
                strategy,
                depth_limit: input.depth_limit,
            },
            metric: input.metric.unwrap_or_default(),
            include_traversing: input.include_traversing.unwrap_or(false),
        })
    }

    /// Parse and resolve a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or unknown keys and
    /// [`ConfigError::Strategy`] for an unknown strategy tag.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let input: TargetingConfigInput =
            serde_json::from_str(text).map_err(|e| ConfigError::Json {
                detail: e.to_string(),
            })?;
        Self::from_input(&input)
    }

    /// Read, parse and resolve a configuration file.
    ///
    /// # Errors
    ///
    /// As [`TargetingConfig::from_json`], plus [`ConfigError::Io`] if the
    /// file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json(&text)
    }
}
