use astar_route_core::{search_ids, Graph, NodeId, SearchResult};
use std::time::Instant;

/// Builds a graph of roughly `node_count` nodes. `informed` selects the
/// generator's heuristic; when false every heuristic is 0 (Dijkstra order).
type Generator = fn(u64, bool) -> Graph;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(250_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: astar-route-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  grid     4-neighbour weighted grid, Manhattan heuristic");
        println!("  tree     Branching tree with random weights, zero heuristic");
        println!("  random   Sparse random digraph, zero heuristic");
        println!();
        println!("Default node_count: 250000");
        return;
    }

    println!("astar-route-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "grid" => vec![("Weighted grid", gen_grid)],
        "tree" => vec![("Branching tree", gen_tree)],
        "random" => vec![("Sparse random digraph", gen_random)],
        "all" => vec![
            ("Weighted grid", gen_grid as Generator),
            ("Branching tree", gen_tree),
            ("Sparse random digraph", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: Generator, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    println!();
    println!(
        "{:>10} {:>12} {:>8} {:>12} {:>10} {:>10}",
        "heuristic", "cost", "hops", "expanded", "build", "search"
    );
    println!(
        "{:->10} {:->12} {:->8} {:->12} {:->10} {:->10}",
        "", "", "", "", "", ""
    );

    for informed in [true, false] {
        let t = Instant::now();
        let graph = generator(node_count, informed);
        let build_time = t.elapsed();

        if informed {
            println!(
                "{:>10} {} nodes, {} edges, ~{:.0}MB",
                "graph",
                graph.node_count(),
                graph.edge_count(),
                graph.memory_usage() as f64 / 1_048_576.0
            );
        }

        // Last node is the far corner / deepest leaf / highest id
        let goal = graph.node_count().saturating_sub(1) as NodeId;
        let t = Instant::now();
        let run = match search_ids(&graph, 0, goal) {
            Ok(run) => run,
            Err(e) => {
                eprintln!("search failed: {}", e);
                return;
            }
        };
        let search_time = t.elapsed();

        let label = if informed { "on" } else { "zero" };
        let (cost, hops) = match run.result() {
            SearchResult::Found(cost) => {
                let goal_label = graph.node_by_id(goal).map(|n| n.label.as_str()).unwrap_or("");
                let hops = run
                    .reconstruct_path(goal_label)
                    .map(|p| p.len().saturating_sub(1))
                    .unwrap_or(0);
                (format!("{:.1}", cost), hops.to_string())
            }
            SearchResult::NotFound => ("no path".to_string(), "-".to_string()),
        };

        println!(
            "{:>10} {:>12} {:>8} {:>12} {:>8.1}ms {:>8.1}ms",
            label,
            cost,
            hops,
            run.nodes_expanded(),
            build_time.as_secs_f64() * 1000.0,
            search_time.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    /// Edge weight in 1..=9.
    fn weight(&mut self) -> f64 {
        (self.next(9) + 1) as f64
    }
}

fn add_nodes(graph: &mut Graph, count: u64, heuristic: impl Fn(u64) -> f64) {
    for i in 0..count {
        graph
            .add_node(format!("n{}", i), heuristic(i))
            .expect("generated labels are unique");
    }
}

/// Square grid with edges to all four neighbours, weights 1..=9.
///
/// The Manhattan distance to the far corner is consistent here because every
/// edge weighs at least 1, so the informed run stays optimal.
fn gen_grid(node_count: u64, informed: bool) -> Graph {
    let side = (node_count as f64).sqrt().max(1.0) as u64;
    let total = side * side;
    let mut graph = Graph::with_capacity(total as usize);
    let mut rng = FastRng::new(42);

    add_nodes(&mut graph, total, |i| {
        if informed {
            let (x, y) = (i % side, i / side);
            ((side - 1 - x) + (side - 1 - y)) as f64
        } else {
            0.0
        }
    });

    for y in 0..side {
        for x in 0..side {
            let id = (y * side + x) as NodeId;
            let mut link = |nx: u64, ny: u64| {
                graph
                    .add_edge_between(id, (ny * side + nx) as NodeId, rng.weight())
                    .expect("grid neighbour is in range");
            };
            if x + 1 < side {
                link(x + 1, y);
            }
            if x > 0 {
                link(x - 1, y);
            }
            if y + 1 < side {
                link(x, y + 1);
            }
            if y > 0 {
                link(x, y - 1);
            }
        }
    }

    graph
}

/// Branching tree: each node gets 3 children, random weights. No useful
/// heuristic exists, so the informed run also uses zeros.
fn gen_tree(node_count: u64, _informed: bool) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(12345);
    let branching = 3u64;

    add_nodes(&mut graph, node_count, |_| 0.0);

    for child in 1..node_count {
        let parent = (child - 1) / branching;
        graph
            .add_edge_between(parent as NodeId, child as NodeId, rng.weight())
            .expect("parent precedes child");
    }

    graph
}

/// Erdos-Renyi style digraph with average out-degree 4, plus a forward chain
/// so the last node is reachable.
fn gen_random(node_count: u64, _informed: bool) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);
    let out_degree = 4u64;

    add_nodes(&mut graph, node_count, |_| 0.0);

    for from in 0..node_count {
        if from + 1 < node_count {
            // Chain edges are expensive so random shortcuts matter
            graph
                .add_edge_between(from as NodeId, (from + 1) as NodeId, 50.0)
                .expect("chain successor is in range");
        }
        for _ in 0..out_degree {
            let to = rng.next(node_count.max(1));
            if to != from {
                graph
                    .add_edge_between(from as NodeId, to as NodeId, rng.weight())
                    .expect("random target is below node_count");
            }
        }
    }

    graph
}
