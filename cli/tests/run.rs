use std::io::Cursor;

use astar_route_cli::{run, solve, CliError, OutputFormat, Problem, Report, Settings};
use astar_route_core::{Graph, GraphError};

const THREE_NODES: &str = "3\nA 2\nB 1\nC 0\n3\nA B 1\nA C 4\nB C 1\nA C\n";

fn run_text(input: &str, settings: &Settings) -> (Result<Report, CliError>, String) {
    let mut out = Vec::new();
    let mut prompt = Vec::new();
    let result = run(Cursor::new(input.as_bytes().to_vec()), &mut out, &mut prompt, settings);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn three_node_scenario_text() {
    let (report, out) = run_text(THREE_NODES, &Settings::default());
    assert_eq!(
        report.unwrap(),
        Report::Found {
            cost: 2.0,
            path: vec!["A".into(), "B".into(), "C".into()],
            nodes_expanded: 3,
        }
    );
    assert_eq!(out, "Shortest path cost: 2.0\nPath: A B C\n");
}

#[test]
fn three_node_scenario_json() {
    let settings = Settings {
        format: OutputFormat::Json,
        ..Settings::default()
    };
    let (_, out) = run_text(THREE_NODES, &settings);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "found");
    assert_eq!(value["path"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn isolated_node_goal_is_start() {
    let (_, out) = run_text("1\nA 0\n0\nA A\n", &Settings::default());
    assert_eq!(out, "Shortest path cost: 0.0\nPath: A\n");
}

#[test]
fn disconnected_graph_reports_no_path() {
    let input = "4\nA 0\nB 0\nC 0\nD 0\n2\nA B 1\nC D 1\nA D\n";
    let (report, out) = run_text(input, &Settings::default());
    assert_eq!(report.unwrap(), Report::NotFound { nodes_expanded: 2 });
    assert_eq!(out, "No path found\n");
}

#[test]
fn unknown_goal_reports_invalid_endpoint() {
    let (report, out) = run_text("1\nA 0\n0\nA Z\n", &Settings::default());
    assert_eq!(report.unwrap(), Report::InvalidEndpoint { label: "Z".into() });
    assert_eq!(out, "Invalid start or goal vertex label\n");
}

#[test]
fn strict_mode_fails_on_duplicate_vertex() {
    let settings = Settings {
        strict: true,
        ..Settings::default()
    };
    let (report, out) = run_text("2\nA 0\nA 1\n0\nA A\n", &settings);
    assert!(matches!(
        report,
        Err(CliError::Graph(GraphError::DuplicateLabel(ref l))) if l == "A"
    ));
    assert!(out.is_empty());
}

#[test]
fn malformed_number_is_an_error() {
    let (report, _) = run_text("x\n", &Settings::default());
    assert_eq!(
        report.unwrap_err().to_string(),
        "invalid vertex count: 'x'"
    );
}

#[test]
fn solve_uses_cheapest_parallel_edge() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0).unwrap();
    graph.add_node("B", 0.0).unwrap();
    graph.add_edge("A", "B", 7.0).unwrap();
    graph.add_edge("A", "B", 3.0).unwrap();
    let problem = Problem {
        graph,
        start: "A".into(),
        goal: "B".into(),
    };
    match solve(&problem).unwrap() {
        Report::Found { cost, path, .. } => {
            assert_eq!(cost, 3.0);
            assert_eq!(path, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("unexpected report {:?}", other),
    }
}

#[test]
fn huge_vertex_count_with_truncated_input_is_eof() {
    let (report, out) = run_text("100000000000000000\nA 0\n", &Settings::default());
    assert!(matches!(
        report,
        Err(CliError::UnexpectedEof { expected: "vertex label" })
    ));
    assert!(out.is_empty());
}
