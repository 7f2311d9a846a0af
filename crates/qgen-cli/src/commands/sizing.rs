//! Sizing command implementation.

use anyhow::Result;

use qgen_algo::determine_qubits;

use super::common::parse_aux;

/// Execute the sizing command: print the width the policy picks.
pub fn execute(algorithm: &str, data: Option<&str>) -> Result<()> {
    let aux = parse_aux(data)?;
    let num_qubits = determine_qubits(algorithm, &aux)?;
    println!("{num_qubits}");
    Ok(())
}
