use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sssp_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sssp_bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_string).collect()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const TRIANGLE: &str = "# sample\n0 1 5\n1 2 3\n0 2 10\n";

#[test]
fn test_cli_reports_timings_and_agreement() {
    let file = edge_file(TRIANGLE);
    let path = file.path().to_str().unwrap();
    let output = sssp_bench(&[path, "0", "3"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4, "{:?}", lines);
    assert_eq!(lines[0], "Loaded graph with 3 nodes.");
    assert!(lines[1].starts_with("Dijkstra (binary heap)        : avg="));
    assert!(lines[1].ends_with("over 3 run(s)"));
    assert!(lines[2].starts_with("Radix heap SSSP               : avg="));
    assert!(lines[2].ends_with("over 3 run(s)"));
    assert_eq!(lines[3], "Results match for both algorithms.");
}

#[test]
fn test_cli_runs_below_one_count_as_one() {
    let file = edge_file(TRIANGLE);
    let path = file.path().to_str().unwrap();
    let output = sssp_bench(&[path, "2", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines = stdout_lines(&output);
    assert!(lines[1].ends_with("over 1 run(s)"));
    assert!(lines[2].ends_with("over 1 run(s)"));
}

#[test]
fn test_cli_empty_graph_is_reported_before_source_range() {
    let file = edge_file("# nothing but comments\n\n");
    let path = file.path().to_str().unwrap();
    let output = sssp_bench(&[path, "5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("Error: Input graph is empty"));
}

#[test]
fn test_cli_rejects_sources_outside_the_graph() {
    let file = edge_file(TRIANGLE);
    let path = file.path().to_str().unwrap();

    for source in ["3", "-1"] {
        let output = sssp_bench(&[path, source]);
        assert_eq!(output.status.code(), Some(1), "source {}", source);
        let message = stderr(&output);
        assert!(message.starts_with("Error: Source node"), "{}", message);
        assert!(message.contains("out of range for a graph with 3 nodes"));
        assert!(stdout_lines(&output).is_empty());
    }
}

#[test]
fn test_cli_input_errors_exit_with_failure() {
    let file = edge_file("0 1 2\n1 x 3\n");
    let output = sssp_bench(&[file.path().to_str().unwrap(), "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Invalid line 2 in input file"));

    let output = sssp_bench(&["/nonexistent/graph.txt", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Failed to read input file"));

    let output = sssp_bench(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_json_report() {
    let file = edge_file(TRIANGLE);
    let path = file.path().to_str().unwrap();
    let output = sssp_bench(&[path, "0", "2", "--json", "--parallel"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["vertices"], 3);
    assert_eq!(report["reachable"], 3);
    assert_eq!(report["results_match"], true);
    assert_eq!(report["timings"][0]["runs"], 2);
}
