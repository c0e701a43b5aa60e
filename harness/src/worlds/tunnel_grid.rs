//! `TunnelGrid`: 4-connected movement through dug tunnels and diggable
//! earth, with rocks as walls.
//!
//! Entering a tunnel cell costs 1; entering earth costs `1 + dig_cost`.
//! Rocks and the outside of the grid cannot be entered. The heuristic is
//! Manhattan distance, which never overestimates because every step costs
//! at least 1.
//!
//! Coordinates follow the game's screen convention: `x` grows east, `y`
//! grows south.

use std::fmt;

use delve_search::SearchDomain;

use crate::contract::SearchWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::West => Self::new(self.x - 1, self.y),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
        }
    }

    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Movement direction, in the order actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::West, Self::South, Self::East];

    /// Key the game client sends for this move.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::North => 'w',
            Self::West => 'a',
            Self::South => 's',
            Self::East => 'd',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Tunnel,
    Earth,
    Rock,
}

/// Failure building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows or no columns.
    Empty,
    /// A row (or column) has a different length from the first.
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// An unrecognised character in an ASCII grid.
    UnknownCell { ch: char, x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged {
                line,
                expected,
                actual,
            } => write!(f, "line {line} has {actual} cells, expected {expected}"),
            Self::UnknownCell { ch, x, y } => write!(f, "unknown cell {ch:?} at ({x}, {y})"),
        }
    }
}

impl std::error::Error for GridError {}

/// Tunnel grid world.
#[derive(Debug, Clone)]
pub struct TunnelGrid {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<Cell>,
    dig_cost: f64,
}

impl TunnelGrid {
    /// Parse rows of `.` (tunnel), `#` (earth) and `R` (rock).
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for empty or ragged input or unknown characters.
    pub fn parse(text: &str, dig_cost: f64) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let count = row.chars().count();
            if count != width {
                return Err(GridError::Ragged {
                    line: y,
                    expected: width,
                    actual: count,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '.' => Cell::Tunnel,
                    '#' => Cell::Earth,
                    'R' => Cell::Rock,
                    _ => return Err(GridError::UnknownCell { ch, x, y }),
                });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
            dig_cost,
        })
    }

    /// Build from a game map indexed `map[x][y]` where `0` is a tunnel and
    /// anything else is earth, then place rocks.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for an empty or ragged map.
    pub fn from_columns(map: &[Vec<u8>], rocks: &[Pos], dig_cost: f64) -> Result<Self, GridError> {
        let width = map.len();
        let height = map.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = vec![Cell::Earth; width * height];
        for (x, column) in map.iter().enumerate() {
            if column.len() != height {
                return Err(GridError::Ragged {
                    line: x,
                    expected: height,
                    actual: column.len(),
                });
            }
            for (y, &value) in column.iter().enumerate() {
                if value == 0 {
                    cells[y * width + x] = Cell::Tunnel;
                }
            }
        }

        let mut grid = Self {
            width,
            height,
            cells,
            dig_cost,
        };
        for &rock in rocks {
            if let Some(i) = grid.index(rock) {
                grid.cells[i] = Cell::Rock;
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    fn enter_cost(&self, pos: Pos) -> Option<f64> {
        match self.cell(pos)? {
            Cell::Tunnel => Some(1.0),
            Cell::Earth => Some(1.0 + self.dig_cost),
            Cell::Rock => None,
        }
    }
}

impl SearchDomain for TunnelGrid {
    type State = Pos;
    type Action = Direction;

    fn actions(&self, state: &Pos) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.enter_cost(state.step(dir)).is_some())
            .collect()
    }

    fn result(&self, state: &Pos, action: &Direction) -> Pos {
        state.step(*action)
    }

    fn cost(&self, state: &Pos, action: &Direction) -> Option<f64> {
        self.cell(*state)?;
        self.enter_cost(state.step(*action))
    }

    fn heuristic(&self, state: &Pos, goal: &Pos) -> f64 {
        f64::from(state.manhattan(*goal))
    }
}

impl SearchWorld for TunnelGrid {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "tunnel_grid"
    }
}
