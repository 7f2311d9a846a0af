//! End-to-end tests for the `qgen` binary.
//!
//! Each test runs the built binary and checks its stdout, stderr and exit
//! status.

use std::process::{Command, Output};

fn qgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qgen"))
        .args(args)
        .env_remove("QGEN_SEED")
        .output()
        .expect("failed to run qgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// generate
// ============================================================================

mod generate {
    use super::*;

    #[test]
    fn test_bell_qasm_document() {
        let output = qgen(&["generate", "bell"]);
        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            "OPENQASM 2.0;\n\
             include \"qelib1.inc\";\n\
             \n\
             qreg q[2];\n\
             creg c[2];\n\
             \n\
             h q[0];\n\
             cx q[0],q[1];\n\
             measure q[0] -> c[0];\n\
             measure q[1] -> c[1];\n"
        );
    }

    #[test]
    fn test_grover_sized_from_item_count() {
        let output = qgen(&["generate", "Grover", "--data", r#"{"num_items": 10}"#]);
        assert!(output.status.success());
        let qasm = stdout(&output);
        assert!(qasm.contains("qreg q[4];"));
        assert_eq!(qasm.matches("measure").count(), 4);
    }

    #[test]
    fn test_seed_reproduces_variational_angles() {
        let first = qgen(&["generate", "vqe", "--seed", "42"]);
        let second = qgen(&["generate", "vqe", "--seed", "42"]);
        assert!(first.status.success());
        assert_eq!(stdout(&first), stdout(&second));
    }

    #[test]
    fn test_seed_from_environment() {
        let run = || {
            Command::new(env!("CARGO_BIN_EXE_qgen"))
                .args(["generate", "qaoa"])
                .env("QGEN_SEED", "9")
                .output()
                .expect("failed to run qgen")
        };
        assert_eq!(stdout(&run()), stdout(&run()));
    }

    #[test]
    fn test_json_envelope() {
        let output = qgen(&["generate", "shor", "--format", "json"]);
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value["algorithm"], "Shor");
        assert_eq!(value["num_qubits"], 16);
        assert_eq!(value["metadata"]["control_qubits"], 8);
        assert!(value["qasm"].as_str().unwrap().starts_with("OPENQASM 2.0;"));
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bell.qasm");
        let path_str = path.to_str().unwrap();

        let output = qgen(&["generate", "bell", "-o", path_str]);
        assert!(output.status.success());
        assert!(stdout(&output).is_empty());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("cx q[0],q[1];"));
    }

    #[test]
    fn test_data_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, r#"{"num_items": 8, "edges": [[0, 1], [1, 2]]}"#).unwrap();
        let data = format!("@{}", path.display());

        let output = qgen(&["generate", "qaoa", "--seed", "1", "-f", "json", "-d", &data]);
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value["num_qubits"], 3);
        assert_eq!(value["metadata"]["edges"], 2);
    }

    #[test]
    fn test_config_file_overrides_layers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"vqe_layers": 1}"#).unwrap();

        let output = qgen(&[
            "generate",
            "vqe",
            "--seed",
            "3",
            "--format",
            "json",
            "--config",
            path.to_str().unwrap(),
        ]);
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value["metadata"]["layers"], 1);
    }
}

// ============================================================================
// sizing / algorithms
// ============================================================================

mod listing {
    use super::*;

    #[test]
    fn test_sizing_defaults() {
        for (algorithm, expected) in [
            ("bell", "2"),
            ("grover", "8"),
            ("shor", "16"),
            ("vqe", "12"),
            ("qaoa", "10"),
            ("teleport", "4"),
        ] {
            let output = qgen(&["sizing", algorithm]);
            assert!(output.status.success());
            assert_eq!(stdout(&output).trim(), expected, "{algorithm}");
        }
    }

    #[test]
    fn test_sizing_with_items() {
        let output = qgen(&["sizing", "grover", "--data", r#"{"num_items": 10}"#]);
        assert_eq!(stdout(&output).trim(), "4");
    }

    #[test]
    fn test_algorithms_lists_every_family() {
        let output = qgen(&["algorithms"]);
        assert!(output.status.success());
        let text = stdout(&output);
        for id in ["bell", "grover", "shor", "vqe", "qaoa"] {
            assert!(text.contains(id), "missing {id}");
        }
    }
}

// ============================================================================
// error paths
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_unknown_algorithm() {
        let output = qgen(&["generate", "teleport"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
        let err = stderr(&output);
        assert!(err.contains("Error:"));
        assert!(err.contains("teleport"));
    }

    #[test]
    fn test_non_positive_item_count() {
        let output = qgen(&["sizing", "grover", "--data", r#"{"num_items": 0}"#]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("0"));
    }

    #[test]
    fn test_malformed_data() {
        let output = qgen(&["generate", "bell", "--data", "not json"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Invalid input"));
    }

    #[test]
    fn test_out_of_range_edge() {
        let output = qgen(&[
            "generate",
            "qaoa",
            "--data",
            r#"{"num_items": 4, "edges": [[0, 5]]}"#,
        ]);
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_oversized_config_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"shor_min_qubits": 4000000000}"#).unwrap();

        let output = qgen(&["generate", "shor", "--config", path.to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("shor_min_qubits"));
    }

    #[test]
    fn test_missing_config_file() {
        let output = qgen(&["generate", "bell", "--config", "/nonexistent/qgen.json"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Config file not found"));
    }
}
