//! Generate command implementation.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use serde::Serialize;
use tracing::info;

use qgen_algo::{generate_with_config, rng_from_seed};
use qgen_ir::{Circuit, Metadata};
use qgen_qasm::emit_qasm2;

use super::common::{load_config, parse_aux, write_output};

/// Output representation for the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// OpenQASM 2.0 document.
    Qasm,
    /// Summary envelope with the QASM text and metadata.
    Json,
    /// Full gate-level IR as JSON.
    Ir,
}

/// JSON envelope for `--format json`.
#[derive(Debug, Serialize)]
pub struct GenerationReport<'a> {
    pub algorithm: &'a str,
    pub num_qubits: u32,
    pub num_gates: usize,
    pub depth: usize,
    pub qasm: String,
    pub metadata: &'a Metadata,
}

impl<'a> GenerationReport<'a> {
    pub fn new(circuit: &'a Circuit, qasm: String) -> Self {
        Self {
            algorithm: circuit.algorithm(),
            num_qubits: circuit.num_qubits(),
            num_gates: circuit.num_gates(),
            depth: circuit.depth(),
            qasm,
            metadata: circuit.metadata(),
        }
    }
}

/// Execute the generate command.
pub fn execute(
    algorithm: &str,
    data: Option<&str>,
    seed: Option<u64>,
    format: OutputFormat,
    output: Option<&str>,
    config: Option<&str>,
) -> Result<()> {
    let aux = parse_aux(data)?;
    let config = load_config(config)?;
    let mut rng = rng_from_seed(seed);

    let circuit = generate_with_config(algorithm, &aux, &config, &mut rng)?;
    info!(
        algorithm = circuit.algorithm(),
        num_qubits = circuit.num_qubits(),
        num_gates = circuit.num_gates(),
        "generated circuit"
    );

    let rendered = render(&circuit, format)?;
    write_output(&rendered, output)?;

    if let Some(path) = output {
        eprintln!(
            "{} Wrote {} circuit ({} qubits, {} gates) to {}",
            style("✓").green().bold(),
            style(circuit.algorithm()).cyan(),
            circuit.num_qubits(),
            circuit.num_gates(),
            style(path).cyan()
        );
    }

    Ok(())
}

/// Render a circuit in the requested format.
pub fn render(circuit: &Circuit, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Qasm => Ok(emit_qasm2(circuit)?),
        OutputFormat::Json => {
            let report = GenerationReport::new(circuit, emit_qasm2(circuit)?);
            serde_json::to_string_pretty(&report).context("Failed to serialize report")
        }
        OutputFormat::Ir => {
            serde_json::to_string_pretty(circuit).context("Failed to serialize circuit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgen_algo::{AuxData, generate};

    fn bell() -> Circuit {
        generate("bell", &AuxData::default(), &mut rng_from_seed(Some(0))).unwrap()
    }

    #[test]
    fn test_render_qasm() {
        let qasm = render(&bell(), OutputFormat::Qasm).unwrap();
        assert!(qasm.starts_with("OPENQASM 2.0;\n"));
        assert!(qasm.contains("cx q[0],q[1];"));
    }

    #[test]
    fn test_render_json_envelope() {
        let json = render(&bell(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "Bell");
        assert_eq!(value["num_qubits"], 2);
        assert_eq!(value["num_gates"], 3);
        assert_eq!(value["depth"], 3);
        assert_eq!(value["metadata"]["expected_states"], serde_json::json!(["00", "11"]));
        assert!(value["qasm"].as_str().unwrap().contains("h q[0];"));
    }

    #[test]
    fn test_render_ir() {
        let json = render(&bell(), OutputFormat::Ir).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["gates"][0]["gate"], "h");
        assert_eq!(value["gates"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_render_ir_uses_gate_kind_names() {
        let circuit = generate("vqe", &AuxData::default(), &mut rng_from_seed(Some(1))).unwrap();
        let json = render(&circuit, OutputFormat::Ir).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value["gates"][0];
        assert_eq!(first["gate"], "ry");
        assert_eq!(first["targets"], serde_json::json!([0]));
        assert!(first["params"]["theta"].is_f64());

        let names: Vec<_> = value["gates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["gate"].as_str().unwrap().to_string())
            .collect();
        assert!(names.iter().all(|n| ["ry", "cx", "rz", "measure"].contains(&n.as_str())));
    }
}
