//! The closed set of algorithm families.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GenError;

/// An algorithm family the generators know how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// Two-qubit Bell state preparation.
    Bell,
    /// Grover search.
    Grover,
    /// Shor period-finding template.
    Shor,
    /// Variational quantum eigensolver ansatz.
    Vqe,
    /// Quantum approximate optimization.
    Qaoa,
}

impl Algorithm {
    /// All algorithms, in listing order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bell,
        Algorithm::Grover,
        Algorithm::Shor,
        Algorithm::Vqe,
        Algorithm::Qaoa,
    ];

    /// Lowercase identifier accepted on input.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bell => "bell",
            Algorithm::Grover => "grover",
            Algorithm::Shor => "shor",
            Algorithm::Vqe => "vqe",
            Algorithm::Qaoa => "qaoa",
        }
    }

    /// Canonical display name, recorded on generated circuits.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Algorithm::Bell => "Bell",
            Algorithm::Grover => "Grover",
            Algorithm::Shor => "Shor",
            Algorithm::Vqe => "VQE",
            Algorithm::Qaoa => "QAOA",
        }
    }

    /// Width used when no item count is given.
    pub fn default_qubits(self) -> u32 {
        match self {
            Algorithm::Bell => 2,
            Algorithm::Grover => 8,
            Algorithm::Shor => 16,
            Algorithm::Vqe => 12,
            Algorithm::Qaoa => 10,
        }
    }

    /// One-line summary for listings.
    pub fn summary(self) -> &'static str {
        match self {
            Algorithm::Bell => "Creates maximally entangled Bell state",
            Algorithm::Grover => "Grover search for unsorted database",
            Algorithm::Shor => "Shor period finding for factoring",
            Algorithm::Vqe => "VQE for ground state energy estimation",
            Algorithm::Qaoa => "QAOA for combinatorial optimization",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for Algorithm {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| GenError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("bell".parse::<Algorithm>(), Ok(Algorithm::Bell));
        assert_eq!("GROVER".parse::<Algorithm>(), Ok(Algorithm::Grover));
        assert_eq!("Vqe".parse::<Algorithm>(), Ok(Algorithm::Vqe));
        assert_eq!("qAoA".parse::<Algorithm>(), Ok(Algorithm::Qaoa));
    }

    #[test]
    fn test_unknown_algorithm_names_identifier() {
        let err = "deutsch".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, GenError::UnknownAlgorithm("deutsch".into()));
        assert!(err.to_string().contains("deutsch"));
    }

    #[test]
    fn test_canonical_names() {
        let names: Vec<_> = Algorithm::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Bell", "Grover", "Shor", "VQE", "QAOA"]);
    }
}
