//! Auxiliary generator input.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Optional numeric input accompanying an algorithm identifier.
///
/// Unknown keys are ignored so callers can pass a larger request object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxData {
    /// Number of distinct items the circuit must be able to index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_items: Option<i64>,
    /// QAOA problem graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

impl AuxData {
    /// Parse auxiliary data from a JSON object.
    pub fn from_json(json: &str) -> GenResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GenError::InvalidInput(format!("malformed auxiliary data: {e}")))
    }

    /// Set the item count.
    #[must_use]
    pub fn with_num_items(mut self, num_items: i64) -> Self {
        self.num_items = Some(num_items);
        self
    }

    /// Set the problem graph edges.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges = Some(edges.into_iter().collect());
        self
    }
}

/// One edge of a QAOA problem graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Edge {
    /// An explicit `[i, j]` pair.
    Pair(u32, u32),
    /// A bare vertex `v`, read as the ring edge `(v, (v + 1) mod n)`.
    Vertex(u32),
}

impl Edge {
    /// Resolve the edge endpoints in a graph of `num_qubits` vertices.
    pub fn endpoints(self, num_qubits: u32) -> (u32, u32) {
        let n = num_qubits.max(1);
        match self {
            Edge::Pair(i, j) => (i, j),
            Edge::Vertex(v) => (v, (v % n + 1) % n),
        }
    }
}

impl From<(u32, u32)> for Edge {
    fn from((i, j): (u32, u32)) -> Self {
        Edge::Pair(i, j)
    }
}
