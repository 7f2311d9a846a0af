//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Largest accepted layer or iteration count.
pub const MAX_LAYERS: u32 = 64;

/// Largest accepted Shor minimum width.
pub const MAX_SHOR_QUBITS: u32 = 128;

/// Tunable knobs of the generators.
///
/// The defaults reproduce the fixed circuit shapes: at most 3 Grover
/// iterations, Shor circuits of at least 16 qubits, a 3-layer VQE ansatz and
/// a depth-2 QAOA circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound on Grover iterations.
    pub grover_max_iterations: u32,
    /// Minimum width of a Shor circuit.
    pub shor_min_qubits: u32,
    /// Number of VQE ansatz layers.
    pub vqe_layers: u32,
    /// Number of QAOA cost/mixer layers.
    pub qaoa_layers: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grover_max_iterations: 3,
            shor_min_qubits: 16,
            vqe_layers: 3,
            qaoa_layers: 2,
        }
    }
}

impl GeneratorConfig {
    /// Reject knobs outside their bounds.
    pub fn validate(&self) -> GenResult<()> {
        let bounds = [
            ("grover_max_iterations", self.grover_max_iterations, MAX_LAYERS),
            ("shor_min_qubits", self.shor_min_qubits, MAX_SHOR_QUBITS),
            ("vqe_layers", self.vqe_layers, MAX_LAYERS),
            ("qaoa_layers", self.qaoa_layers, MAX_LAYERS),
        ];
        for (name, value, max) in bounds {
            if value > max {
                return Err(GenError::InvalidInput(format!(
                    "{name} must be at most {max}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"vqe_layers": 5}"#).unwrap();
        assert_eq!(config.vqe_layers, 5);
        assert_eq!(config.grover_max_iterations, 3);
        assert_eq!(config.shor_min_qubits, 16);
        assert_eq!(config.qaoa_layers, 2);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_knobs_are_rejected() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"vqe_layers": 4000000000}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GenError::InvalidInput(ref m) if m.contains("vqe_layers")));

        let config = GeneratorConfig {
            shor_min_qubits: MAX_SHOR_QUBITS + 1,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            qaoa_layers: MAX_LAYERS,
            grover_max_iterations: MAX_LAYERS,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
