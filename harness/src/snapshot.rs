//! Per-turn game state snapshot.
//!
//! Parses the JSON object the game server sends each turn. Only `digdug`
//! and `enemies` are required; every other field is optional and unknown
//! fields are ignored.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::worlds::tunnel_grid::{GridError, Pos, TunnelGrid};

/// One enemy as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub pos: [i32; 2],
    /// Facing, as the server's direction index.
    #[serde(default)]
    pub dir: Option<u8>,
    /// Set while the enemy is moving through earth as a ghost.
    #[serde(default)]
    pub traverse: Option<bool>,
}

impl Enemy {
    #[must_use]
    pub fn is_traversing(&self) -> bool {
        self.traverse == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rock {
    #[serde(default)]
    pub id: Option<String>,
    pub pos: [i32; 2],
}

/// A full turn snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSnapshot {
    /// Player position.
    pub digdug: [i32; 2],
    pub enemies: Vec<Enemy>,
    #[serde(default)]
    pub rocks: Vec<Rock>,
    /// Column-major (`map[x][y]`), `0` for dug cells.
    #[serde(default)]
    pub map: Option<Vec<Vec<u8>>>,
    #[serde(default)]
    pub step: Option<u64>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub lives: Option<u32>,
    #[serde(default)]
    pub score: Option<u64>,
    #[serde(default)]
    pub player: Option<String>,
}

/// Failure loading a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The file could not be read.
    Io { path: String, detail: String },
    /// The text is not a valid snapshot.
    Json { detail: String },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read snapshot {path}: {detail}"),
            Self::Json { detail } => write!(f, "malformed snapshot: {detail}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl GameSnapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the text is not a snapshot.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|e| SnapshotError::Json {
            detail: e.to_string(),
        })
    }

    /// Read and parse a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read and
    /// [`SnapshotError::Json`] if its contents are not a snapshot.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    #[must_use]
    pub fn player_pos(&self) -> Pos {
        Pos::new(self.digdug[0], self.digdug[1])
    }

    /// The tunnel grid for this turn, or `None` when the snapshot carries
    /// no map.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for an empty or ragged map.
    pub fn tunnel_grid(&self, dig_cost: f64) -> Option<Result<TunnelGrid, GridError>> {
        let map = self.map.as_ref()?;
        let rocks: Vec<Pos> = self
            .rocks
            .iter()
            .map(|r| Pos::new(r.pos[0], r.pos[1]))
            .collect();
        Some(TunnelGrid::from_columns(map, &rocks, dig_cost))
    }
}
