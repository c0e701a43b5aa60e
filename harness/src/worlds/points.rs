//! `PointsGraph`: named points on a plane joined by weighted, undirected
//! connections.
//!
//! States are point names. An action is an ordered `(from, to)` pair; it is
//! offered from `from` for every connection touching it, in the order the
//! connections were added. The heuristic is the distance between the two
//! points' coordinates under the configured [`Metric`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use delve_search::SearchDomain;

use crate::contract::SearchWorld;

/// Distance function for the heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Straight-line distance. Admissible when edge costs are at least
    /// the straight-line length.
    #[default]
    Euclidean,
    /// `|dx| + |dy|`. Admissible on 4-connected grids with unit steps.
    Manhattan,
}

impl Metric {
    #[must_use]
    pub fn distance(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let (dx, dy) = (a.0 - b.0, a.1 - b.1);
        match self {
            Self::Euclidean => dx.hypot(dy),
            Self::Manhattan => dx.abs() + dy.abs(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        })
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            other => Err(format!(
                "unknown metric {other:?} (expected euclidean or manhattan)"
            )),
        }
    }
}

/// An undirected weighted connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub a: String,
    pub b: String,
    pub cost: f64,
}

/// Points graph world.
#[derive(Debug, Clone, Default)]
pub struct PointsGraph {
    connections: Vec<Connection>,
    coordinates: BTreeMap<String, (f64, f64)>,
    metric: Metric,
}

impl PointsGraph {
    #[must_use]
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Every pair of `points` connected, weighted by straight-line distance.
    #[must_use]
    pub fn fully_connected(points: &[(&str, (f64, f64))], metric: Metric) -> Self {
        let mut graph = Self::new(metric);
        for &(name, at) in points {
            graph.add_point(name, at);
        }
        for (i, &(a, _)) in points.iter().enumerate() {
            for &(b, _) in &points[i + 1..] {
                graph.connect_by_distance(a, b);
            }
        }
        graph
    }

    /// Place (or move) a named point.
    pub fn add_point(&mut self, name: &str, at: (f64, f64)) {
        self.coordinates.insert(name.to_string(), at);
    }

    pub fn connect(&mut self, a: &str, b: &str, cost: f64) {
        self.connections.push(Connection {
            a: a.to_string(),
            b: b.to_string(),
            cost,
        });
    }

    /// Connect two placed points with their straight-line distance as cost.
    ///
    /// Returns `false` (and adds nothing) if either point has no coordinates.
    pub fn connect_by_distance(&mut self, a: &str, b: &str) -> bool {
        let (Some(&pa), Some(&pb)) = (self.coordinates.get(a), self.coordinates.get(b)) else {
            return false;
        };
        self.connect(a, b, Metric::Euclidean.distance(pa, pb));
        true
    }

    #[must_use]
    pub fn coordinates(&self, name: &str) -> Option<(f64, f64)> {
        self.coordinates.get(name).copied()
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl SearchDomain for PointsGraph {
    type State = String;
    type Action = (String, String);

    fn actions(&self, point: &String) -> Vec<(String, String)> {
        self.connections
            .iter()
            .filter_map(|c| {
                if c.a == *point {
                    Some((c.a.clone(), c.b.clone()))
                } else if c.b == *point {
                    Some((c.b.clone(), c.a.clone()))
                } else {
                    None
                }
            })
            .collect()
    }

    fn result(&self, _point: &String, action: &(String, String)) -> String {
        action.1.clone()
    }

    fn cost(&self, point: &String, action: &(String, String)) -> Option<f64> {
        let (from, to) = action;
        if from != point {
            return None;
        }
        self.connections
            .iter()
            .find(|c| (c.a == *from && c.b == *to) || (c.a == *to && c.b == *from))
            .map(|c| c.cost)
    }

    /// Zero when either point has no coordinates.
    fn heuristic(&self, point: &String, goal: &String) -> f64 {
        match (self.coordinates.get(point), self.coordinates.get(goal)) {
            (Some(&a), Some(&b)) => self.metric.distance(a, b),
            _ => 0.0,
        }
    }
}

impl SearchWorld for PointsGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "points"
    }
}
