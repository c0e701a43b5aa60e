//! Optimality lock tests: uniform-cost and A* return the exhaustive
//! minimum cost on seeded random graphs; breadth-first returns the fewest
//! edges.

use delve_search::{solve, SearchPolicy, SearchProblem, SearchTree, Strategy};
use lock_tests::random_graph::RandomGraph;

const SEEDS: u64 = 60;
const NODES: usize = 7;
const DENSITY: f64 = 0.35;
const TOLERANCE: f64 = 1e-9;

fn graphs() -> impl Iterator<Item = (u64, RandomGraph)> {
    (0..SEEDS).map(|seed| (seed, RandomGraph::generate(seed, NODES, DENSITY)))
}

#[test]
fn uniform_and_astar_match_exhaustive_minimum() {
    let mut solved = 0;
    for (seed, graph) in graphs() {
        for goal in 1..NODES {
            let problem = SearchProblem::new(&graph, 0, goal);
            let expected = graph.min_cost(0, goal);
            for strategy in [Strategy::UniformCost, Strategy::AStar] {
                let got = solve(&problem, &SearchPolicy::new(strategy)).map(|s| s.cost);
                match (expected, got) {
                    (Some(e), Some(g)) => assert!(
                        (e - g).abs() < TOLERANCE,
                        "seed={seed} goal={goal} {strategy}: expected {e}, got {g}"
                    ),
                    (None, None) => {}
                    other => panic!("seed={seed} goal={goal} {strategy}: {other:?}"),
                }
            }
            solved += usize::from(expected.is_some());
        }
    }
    // The generator must actually produce reachable goals.
    assert!(solved >= 60, "only {solved} reachable goals");
}

#[test]
fn breadth_first_finds_fewest_edges() {
    for (seed, graph) in graphs() {
        for goal in 1..NODES {
            let problem = SearchProblem::new(&graph, 0, goal);
            let got = solve(&problem, &SearchPolicy::new(Strategy::BreadthFirst)).map(|s| s.depth);
            assert_eq!(got, graph.min_edges(0, goal), "seed={seed} goal={goal}");
        }
    }
}

#[test]
fn every_strategy_agrees_on_reachability() {
    for (seed, graph) in graphs() {
        for goal in 1..NODES {
            let problem = SearchProblem::new(&graph, 0, goal);
            let reachable = graph.min_cost(0, goal).is_some();
            for strategy in Strategy::ALL {
                let mut tree = SearchTree::new(&problem, strategy);
                assert_eq!(
                    tree.search(None).is_some(),
                    reachable,
                    "seed={seed} goal={goal} {strategy}"
                );
            }
        }
    }
}

#[test]
fn non_optimal_strategies_never_beat_the_minimum() {
    for (seed, graph) in graphs() {
        for goal in 1..NODES {
            let Some(best) = graph.min_cost(0, goal) else {
                continue;
            };
            let problem = SearchProblem::new(&graph, 0, goal);
            for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::Greedy] {
                let cost = solve(&problem, &SearchPolicy::new(strategy))
                    .map(|s| s.cost)
                    .unwrap();
                assert!(cost + TOLERANCE >= best, "seed={seed} goal={goal} {strategy}");
            }
        }
    }
}
