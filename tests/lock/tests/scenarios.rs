//! Scenario lock tests: fixed problems with known answers.

use delve_harness::worlds::chain::Chain;
use delve_harness::worlds::points::{Metric, PointsGraph};
use delve_harness::worlds::tunnel_grid::Direction;
use delve_search::graph::TerminationReason;
use delve_search::{solve, Outcome, SearchPolicy, SearchProblem, SearchTree, Strategy};
use lock_tests::fixtures::{
    digdug_triangle, five_state_chain, tunnel_grid, GRID_GOAL, GRID_START,
};

fn s(v: &str) -> String {
    v.to_string()
}

// ---------------------------------------------------------------------------
// Player and two enemies
// ---------------------------------------------------------------------------

#[test]
fn astar_reaches_near_enemy_directly() {
    let graph = digdug_triangle();
    let problem = SearchProblem::new(&graph, s("digdug"), s("e2"));
    let mut tree = SearchTree::new(&problem, Strategy::AStar);

    assert_eq!(tree.search(None), Some(vec![s("digdug"), s("e2")]));
    assert!((tree.solution_cost().unwrap() - 2f64.sqrt()).abs() < 1e-9);
    assert_eq!(tree.solution_depth(), Some(1));
    assert_eq!(tree.solution_plan(), Some(vec![(s("digdug"), s("e2"))]));
}

#[test]
fn astar_prefers_direct_edge_to_far_enemy() {
    // Direct: 3. Through e2: sqrt(2) + sqrt(5) ~ 3.65.
    let graph = digdug_triangle();
    let problem = SearchProblem::new(&graph, s("digdug"), s("e1"));
    let solution = solve(&problem, &SearchPolicy::new(Strategy::AStar)).unwrap();
    assert_eq!(solution.path, vec![s("digdug"), s("e1")]);
    assert!((solution.cost - 3.0).abs() < 1e-9);
}

#[test]
fn astar_routes_through_cheaper_two_hop_path() {
    // Same points, but the direct edge is expensive.
    let mut graph = PointsGraph::new(Metric::Euclidean);
    graph.add_point("digdug", (0.0, 0.0));
    graph.add_point("e1", (3.0, 0.0));
    graph.add_point("e2", (1.0, 1.0));
    graph.connect("digdug", "e1", 10.0);
    graph.connect_by_distance("digdug", "e2");
    graph.connect_by_distance("e2", "e1");

    let problem = SearchProblem::new(&graph, s("digdug"), s("e1"));
    let solution = solve(&problem, &SearchPolicy::new(Strategy::AStar)).unwrap();
    assert_eq!(solution.path, vec![s("digdug"), s("e2"), s("e1")]);
    assert!((solution.cost - (2f64.sqrt() + 5f64.sqrt())).abs() < 1e-9);
    assert_eq!(solution.depth, 2);
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

#[test]
fn uniform_walks_five_state_chain() {
    let chain = five_state_chain();
    let problem = SearchProblem::new(&chain, 0, chain.last());
    let solution = solve(&problem, &SearchPolicy::new(Strategy::UniformCost)).unwrap();
    assert_eq!(solution.path, vec![0, 1, 2, 3, 4]);
    assert_eq!(solution.depth, 4);
    assert!((solution.cost - 8.0).abs() < 1e-12);
    assert!((solution.cost - chain.total_cost()).abs() < 1e-12);
}

#[test]
fn depth_limit_below_chain_length_finds_nothing() {
    let chain = five_state_chain();
    let problem = SearchProblem::new(&chain, 0, chain.last());
    let mut tree = SearchTree::new(&problem, Strategy::UniformCost);
    assert_eq!(tree.search(Some(3)), None);
    assert_eq!(tree.graph().metadata.total_depth_limited, 1);

    let mut tree = SearchTree::new(&problem, Strategy::UniformCost);
    assert!(tree.search(Some(4)).is_some());
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn initial_goal_is_immediate_for_every_strategy() {
    let graph = digdug_triangle();
    let problem = SearchProblem::new(&graph, s("e1"), s("e1"));
    for strategy in Strategy::ALL {
        let mut tree = SearchTree::new(&problem, strategy);
        assert_eq!(tree.search(None), Some(vec![s("e1")]), "{strategy}");
        assert_eq!(tree.solution_depth(), Some(0));
        assert_eq!(tree.solution_cost(), Some(0.0));
        assert_eq!(tree.solution_plan(), Some(Vec::new()));
        assert_eq!(tree.stats().non_terminals, 0);
    }
}

#[test]
fn disconnected_points_exhaust() {
    let mut graph = PointsGraph::new(Metric::Euclidean);
    graph.add_point("a", (0.0, 0.0));
    graph.add_point("b", (1.0, 0.0));
    let problem = SearchProblem::new(&graph, s("a"), s("b"));
    for strategy in Strategy::ALL {
        let mut tree = SearchTree::new(&problem, strategy);
        assert_eq!(tree.search(None), None, "{strategy}");
        assert_eq!(tree.outcome(), Outcome::Exhausted);
        assert_eq!(
            tree.graph().metadata.termination_reason,
            TerminationReason::FrontierExhausted
        );
        assert_eq!(tree.solution_cost(), None);
    }
}

#[test]
fn backwards_chain_exhausts() {
    let chain = Chain::new(vec![1.0, 1.0]);
    let problem = SearchProblem::new(&chain, 2, 0);
    assert!(solve(&problem, &SearchPolicy::default()).is_none());
}

// ---------------------------------------------------------------------------
// Tunnel grid
// ---------------------------------------------------------------------------

#[test]
fn cost_optimal_strategies_take_the_tunnel_detour() {
    let grid = tunnel_grid();
    let problem = SearchProblem::new(&grid, GRID_START, GRID_GOAL);
    for strategy in [Strategy::UniformCost, Strategy::AStar] {
        let solution = solve(&problem, &SearchPolicy::new(strategy)).unwrap();
        assert!((solution.cost - 8.0).abs() < 1e-12, "{strategy}");
        assert_eq!(solution.depth, 8, "{strategy}");
        let keys: String = solution.plan.iter().map(|d| d.key()).collect();
        assert_eq!(keys, "ssddddww", "{strategy}");
    }
}

#[test]
fn breadth_first_digs_straight_through() {
    let grid = tunnel_grid();
    let problem = SearchProblem::new(&grid, GRID_START, GRID_GOAL);
    let solution = solve(&problem, &SearchPolicy::new(Strategy::BreadthFirst)).unwrap();
    assert_eq!(solution.depth, 4);
    assert_eq!(solution.plan, vec![Direction::East; 4]);
    assert!((solution.cost - 10.0).abs() < 1e-12);
}

#[test]
fn astar_expands_no_more_than_uniform() {
    let grid = tunnel_grid();
    let problem = SearchProblem::new(&grid, GRID_START, GRID_GOAL);
    let mut uniform = SearchTree::new(&problem, Strategy::UniformCost);
    let mut astar = SearchTree::new(&problem, Strategy::AStar);
    uniform.search(None);
    astar.search(None);
    assert!(astar.stats().non_terminals <= uniform.stats().non_terminals);
}
