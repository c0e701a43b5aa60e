//! Path and plan lock tests: every returned path is a connected, acyclic
//! walk of `depth + 1` states, and replaying the plan reproduces it.

use std::fmt::Debug;

use delve_search::{SearchDomain, SearchProblem, SearchTree, Strategy};
use lock_tests::fixtures::{digdug_triangle, five_state_chain, tunnel_grid, GRID_GOAL, GRID_START};
use lock_tests::random_graph::RandomGraph;

/// Check every path/plan invariant for one solved search.
fn check_solution<D>(domain: &D, initial: D::State, goal: D::State, strategy: Strategy)
where
    D: SearchDomain,
    D::Action: PartialEq,
{
    let problem = SearchProblem::new(domain, initial.clone(), goal.clone());
    let mut tree = SearchTree::new(&problem, strategy);
    let Some(path) = tree.search(None) else {
        return;
    };
    let plan = tree.solution_plan().unwrap();
    let depth = tree.solution_depth().unwrap() as usize;

    assert_eq!(path.len(), depth + 1, "{strategy}");
    assert_eq!(plan.len(), depth, "{strategy}");
    assert_eq!(path[0], initial, "{strategy}");
    assert!(domain.satisfies(&path[depth], &goal), "{strategy}");

    // Replay and recompute cost.
    let mut state = initial;
    let mut cost = 0.0;
    for (i, action) in plan.iter().enumerate() {
        assert!(
            domain.actions(&state).contains(action),
            "{strategy}: step {i} action {action:?} not offered"
        );
        cost += domain.cost(&state, action).unwrap();
        state = domain.result(&state, action);
        assert_eq!(state, path[i + 1], "{strategy}: step {i}");
    }
    let reported = tree.solution_cost().unwrap();
    assert!((cost - reported).abs() < 1e-9, "{strategy}: {cost} != {reported}");

    assert_no_repeats(&path, strategy);
}

fn assert_no_repeats<S: PartialEq + Debug>(path: &[S], strategy: Strategy) {
    for (i, a) in path.iter().enumerate() {
        for b in &path[i + 1..] {
            assert_ne!(a, b, "{strategy}: state repeats in {path:?}");
        }
    }
}

#[test]
fn points_graph_paths_replay() {
    let graph = digdug_triangle();
    for strategy in Strategy::ALL {
        for goal in ["e1", "e2"] {
            check_solution(&graph, "digdug".to_string(), goal.to_string(), strategy);
        }
    }
}

#[test]
fn tunnel_grid_paths_replay() {
    let grid = tunnel_grid();
    for strategy in Strategy::ALL {
        check_solution(&grid, GRID_START, GRID_GOAL, strategy);
    }
}

#[test]
fn chain_paths_replay() {
    let chain = five_state_chain();
    for strategy in Strategy::ALL {
        check_solution(&chain, 0, chain.last(), strategy);
    }
}

#[test]
fn random_graph_paths_replay() {
    for seed in 0..40 {
        let graph = RandomGraph::generate(seed, 6, 0.4);
        for goal in 1..graph.len() {
            for strategy in Strategy::ALL {
                check_solution(&graph, 0, goal, strategy);
            }
        }
    }
}

#[test]
fn no_created_node_repeats_an_ancestor() {
    // Dense graph: every node can return to every other.
    let graph = RandomGraph::generate(7, 6, 1.0);
    for strategy in Strategy::ALL {
        let problem = SearchProblem::new(&graph, 0, 5);
        let mut tree = SearchTree::new(&problem, strategy);
        tree.search(None);
        for node in tree.nodes() {
            let lineage = tree.path_to(node.node_id);
            assert_no_repeats(&lineage, strategy);
        }
    }
}

#[test]
fn cycle_rejections_are_logged_on_cyclic_domains() {
    let graph = digdug_triangle();
    let problem = SearchProblem::new(&graph, "digdug".to_string(), "nowhere".to_string());
    let mut tree = SearchTree::new(&problem, Strategy::BreadthFirst);
    assert!(tree.search(None).is_none());
    let metadata = tree.graph().metadata;
    assert!(metadata.total_cycles_rejected > 0);
    // Simple paths from the hub: itself, two of length 1, two of length 2.
    assert_eq!(metadata.total_nodes_created, 5);
}
