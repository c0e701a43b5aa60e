//! Shared helpers for delve benchmark suites.
//!
//! A regime is a fixed tunnel grid with a start and a goal. Grids stay
//! small: the engine rejects only ancestor repeats, so the tree over an
//! open grid grows with the number of simple paths.

use delve_harness::worlds::tunnel_grid::{Pos, TunnelGrid};
use delve_search::{SearchNode, SearchProblem, SearchStats, SearchTree, Strategy};

/// A named benchmark problem.
pub struct Regime {
    pub name: &'static str,
    pub grid: TunnelGrid,
    pub start: Pos,
    pub goal: Pos,
}

fn regime(name: &'static str, text: &str, dig_cost: f64, start: Pos, goal: Pos) -> Regime {
    let grid = TunnelGrid::parse(text, dig_cost).unwrap_or_else(|e| panic!("{name}: {e}"));
    Regime {
        name,
        grid,
        start,
        goal,
    }
}

/// Single winding corridor: one path, no branching.
#[must_use]
pub fn regime_corridor() -> Regime {
    regime(
        "corridor",
        "
        .......
        RRRRRR.
        .......
        .RRRRRR
        .......
        ",
        5.0,
        Pos::new(0, 0),
        Pos::new(6, 4),
    )
}

/// Open tunnels, corner to corner. Every monotone path is optimal.
#[must_use]
pub fn regime_open_field() -> Regime {
    regime(
        "open_field",
        "
        .....
        .....
        .....
        .....
        ",
        1.0,
        Pos::new(0, 0),
        Pos::new(4, 3),
    )
}

/// Solid earth, corner to corner. Every move digs.
#[must_use]
pub fn regime_earth_field() -> Regime {
    regime(
        "earth_field",
        "
        .####
        #####
        #####
        #####
        ",
        2.0,
        Pos::new(0, 0),
        Pos::new(4, 3),
    )
}

/// Digging straight is shorter but dearer than the tunnel detour.
#[must_use]
pub fn regime_detour() -> Regime {
    regime(
        "detour",
        "
        .###.
        .#R#.
        .....
        ",
        3.0,
        Pos::new(0, 0),
        Pos::new(4, 0),
    )
}

/// Goal walled off by rocks: every strategy exhausts the tree.
#[must_use]
pub fn regime_walled_off() -> Regime {
    regime(
        "walled_off",
        "
        ...R.
        ...R.
        RRRR.
        .....
        ",
        1.0,
        Pos::new(0, 0),
        Pos::new(4, 0),
    )
}

/// Every regime, in report order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_corridor(),
        regime_open_field(),
        regime_earth_field(),
        regime_detour(),
        regime_walled_off(),
    ]
}

/// Outcome summary of one engine-only run.
pub struct EngineRun {
    pub solved: bool,
    pub total_nodes: usize,
    pub stats: SearchStats,
}

/// Run `search()` on a fresh tree, without canonicalization or hashing.
#[must_use]
pub fn run_search_only(regime: &Regime, strategy: Strategy) -> EngineRun {
    let problem = SearchProblem::new(&regime.grid, regime.start, regime.goal);
    let mut tree = SearchTree::new(&problem, strategy);
    let solved = tree.search(None).is_some();
    EngineRun {
        solved,
        total_nodes: tree.nodes().len(),
        stats: tree.stats(),
    }
}

/// `n` detached nodes with scattered priorities, for frontier benchmarks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn synthetic_nodes(n: usize) -> Vec<SearchNode<usize, ()>> {
    (0..n)
        .map(|i| SearchNode {
            node_id: i,
            parent_id: None,
            state: i,
            depth: u32::try_from(i % 16).unwrap_or(0),
            path_cost: ((i * 7919) % n.max(1)) as f64,
            heuristic: (i % 5) as f64,
            incoming_action: None,
        })
        .collect()
}
