//! Quantum gate types.
//!
//! Every gate shape is its own [`Gate`] variant and carries exactly the fields
//! it needs: rotations always have an angle, controlled gates always have a
//! control, fixed gates have neither.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{InvalidGateReason, IrError, IrResult};
use crate::qubit::QubitId;

/// The gate kinds of the IR, independent of their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// Controlled-NOT.
    CX,
    /// SWAP.
    Swap,
    /// Rotation around X.
    Rx,
    /// Rotation around Y.
    Ry,
    /// Rotation around Z.
    Rz,
    /// Controlled phase.
    CP,
    /// Computational-basis measurement.
    Measure,
}

impl GateKind {
    /// All kinds, in declaration order.
    pub const ALL: [GateKind; 11] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::CX,
        GateKind::Swap,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::CP,
        GateKind::Measure,
    ];

    /// Get the lowercase name of this kind.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::CX => "cx",
            GateKind::Swap => "swap",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::CP => "cp",
            GateKind::Measure => "measure",
        }
    }

    /// Whether gates of this kind require an angle.
    pub fn is_parameterized(self) -> bool {
        matches!(
            self,
            GateKind::Rx | GateKind::Ry | GateKind::Rz | GateKind::CP
        )
    }

    /// Whether gates of this kind require a control qubit.
    pub fn is_controlled(self) -> bool {
        matches!(self, GateKind::CX | GateKind::CP)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown gate kind '{s}'"))
    }
}

/// Unparameterized single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleQubitGate {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl SingleQubitGate {
    /// The matching [`GateKind`].
    pub fn kind(self) -> GateKind {
        match self {
            SingleQubitGate::H => GateKind::H,
            SingleQubitGate::X => GateKind::X,
            SingleQubitGate::Y => GateKind::Y,
            SingleQubitGate::Z => GateKind::Z,
        }
    }
}

/// Axis of a single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// Rotation around X (`rx`).
    X,
    /// Rotation around Y (`ry`).
    Y,
    /// Rotation around Z (`rz`).
    Z,
}

impl RotationAxis {
    /// The matching [`GateKind`].
    pub fn kind(self) -> GateKind {
        match self {
            RotationAxis::X => GateKind::Rx,
            RotationAxis::Y => GateKind::Ry,
            RotationAxis::Z => GateKind::Rz,
        }
    }
}

/// A named rotation angle in radians.
///
/// The name is kept so that descriptive output can report which parameter a
/// generator varied; emission only looks at the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// Angle stored under `theta`.
    Theta(f64),
    /// Angle stored under `phi`.
    Phi(f64),
}

impl Angle {
    /// The angle in radians.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Angle::Theta(v) | Angle::Phi(v) => v,
        }
    }

    /// The parameter name.
    pub fn name(self) -> &'static str {
        match self {
            Angle::Theta(_) => "theta",
            Angle::Phi(_) => "phi",
        }
    }
}

/// A named gate the IR carries but assigns no semantics to.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueGate {
    /// The name of the gate.
    pub name: String,
    /// Qubits it acts on.
    pub qubits: Vec<QubitId>,
    /// Angles, in declaration order.
    pub params: Vec<f64>,
}

impl OpaqueGate {
    /// Create a new opaque gate.
    pub fn new(name: impl Into<String>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
            params: vec![],
        }
    }

    /// Add angle parameters to the gate.
    #[must_use]
    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }
}

/// One quantum operation with its operands.
///
/// The typed constructors ([`Gate::cx`], [`Gate::rotation`], ...) do not
/// check operands; a gate is validated by [`Gate::validate`] when it is
/// pushed onto a [`CircuitBuilder`](crate::CircuitBuilder), so no invalid
/// gate ever reaches a finished circuit. [`Gate::from_parts`] validates
/// immediately.
///
/// Serializes flat, tagged with the kind name:
/// `{"gate": "ry", "targets": [0], "params": {"theta": 0.5}}`. `control` is
/// present for `cx`/`cp` only; opaque gates list their angles positionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// `h`, `x`, `y` or `z` applied to each target.
    Single {
        /// Which gate.
        kind: SingleQubitGate,
        /// Targets, each acted on independently.
        targets: Vec<QubitId>,
    },
    /// `rx`, `ry` or `rz` applied to each target.
    Rotation {
        /// Rotation axis.
        axis: RotationAxis,
        /// Rotation angle.
        angle: Angle,
        /// Targets, each acted on independently.
        targets: Vec<QubitId>,
    },
    /// Controlled-NOT.
    CX {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Controlled phase with angle `theta`.
    CP {
        /// Phase angle in radians.
        theta: f64,
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// SWAP of two qubits, in the order given.
    Swap {
        /// First qubit.
        a: QubitId,
        /// Second qubit.
        b: QubitId,
    },
    /// Measurement of each target into the classical bit of the same index.
    Measure {
        /// Measured qubits, in order.
        targets: Vec<QubitId>,
    },
    /// A user-defined gate.
    Opaque(OpaqueGate),
}

impl Gate {
    /// Hadamard on one qubit.
    pub fn h(qubit: QubitId) -> Self {
        Self::single(SingleQubitGate::H, qubit)
    }

    /// Pauli-X on one qubit.
    pub fn x(qubit: QubitId) -> Self {
        Self::single(SingleQubitGate::X, qubit)
    }

    /// Pauli-Y on one qubit.
    pub fn y(qubit: QubitId) -> Self {
        Self::single(SingleQubitGate::Y, qubit)
    }

    /// Pauli-Z on one qubit.
    pub fn z(qubit: QubitId) -> Self {
        Self::single(SingleQubitGate::Z, qubit)
    }

    fn single(kind: SingleQubitGate, qubit: QubitId) -> Self {
        Gate::Single {
            kind,
            targets: vec![qubit],
        }
    }

    /// Rotation on one qubit.
    pub fn rotation(axis: RotationAxis, angle: Angle, qubit: QubitId) -> Self {
        Gate::Rotation {
            axis,
            angle,
            targets: vec![qubit],
        }
    }

    /// Controlled-NOT. Operands are checked on push, see [`Gate::validate`].
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Gate::CX { control, target }
    }

    /// Controlled phase.
    pub fn cp(theta: f64, control: QubitId, target: QubitId) -> Self {
        Gate::CP {
            theta,
            control,
            target,
        }
    }

    /// SWAP.
    pub fn swap(a: QubitId, b: QubitId) -> Self {
        Gate::Swap { a, b }
    }

    /// Measurement of the given qubits.
    pub fn measure(targets: impl IntoIterator<Item = QubitId>) -> Self {
        Gate::Measure {
            targets: targets.into_iter().collect(),
        }
    }

    /// Build a gate from loosely typed parts, enforcing the construction rules.
    ///
    /// `params` is a list of `(name, radians)` pairs; an empty list means the
    /// gate has no parameters. Rotations read `theta` if present, else `phi`.
    /// Controlled phase requires `theta`.
    pub fn from_parts(
        kind: GateKind,
        targets: Vec<QubitId>,
        control: Option<QubitId>,
        params: &[(&str, f64)],
    ) -> IrResult<Self> {
        let fail = |reason| Err(IrError::invalid_gate(kind.name(), reason));

        if targets.is_empty() {
            return fail(InvalidGateReason::EmptyTargets);
        }
        if let Some((name, _)) = params.iter().find(|(n, _)| *n != "theta" && *n != "phi") {
            return fail(InvalidGateReason::UnknownParam((*name).to_string()));
        }
        let lookup = |name: &str| params.iter().find(|(n, _)| *n == name).map(|(_, v)| *v);

        match (kind.is_parameterized(), params.is_empty()) {
            (true, true) => return fail(InvalidGateReason::MissingParams),
            (false, false) => return fail(InvalidGateReason::UnexpectedParams),
            _ => {}
        }
        match (kind.is_controlled(), control) {
            (true, None) => return fail(InvalidGateReason::MissingControl),
            (false, Some(_)) => return fail(InvalidGateReason::UnexpectedControl),
            _ => {}
        }

        let expect_targets = |n: usize| {
            if targets.len() == n {
                Ok(())
            } else {
                Err(IrError::invalid_gate(
                    kind.name(),
                    InvalidGateReason::TargetCount {
                        expected: n,
                        got: targets.len(),
                    },
                ))
            }
        };

        let gate = match kind {
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z => {
                let single = match kind {
                    GateKind::H => SingleQubitGate::H,
                    GateKind::X => SingleQubitGate::X,
                    GateKind::Y => SingleQubitGate::Y,
                    _ => SingleQubitGate::Z,
                };
                Gate::Single {
                    kind: single,
                    targets,
                }
            }
            GateKind::Rx | GateKind::Ry | GateKind::Rz => {
                let axis = match kind {
                    GateKind::Rx => RotationAxis::X,
                    GateKind::Ry => RotationAxis::Y,
                    _ => RotationAxis::Z,
                };
                let angle = match (lookup("theta"), lookup("phi")) {
                    (Some(theta), _) => Angle::Theta(theta),
                    (None, Some(phi)) => Angle::Phi(phi),
                    (None, None) => return fail(InvalidGateReason::MissingParams),
                };
                Gate::Rotation {
                    axis,
                    angle,
                    targets,
                }
            }
            GateKind::CX => {
                expect_targets(1)?;
                Gate::CX {
                    control: control.unwrap_or(targets[0]),
                    target: targets[0],
                }
            }
            GateKind::CP => {
                expect_targets(1)?;
                let Some(theta) = lookup("theta") else {
                    return fail(InvalidGateReason::MissingParams);
                };
                Gate::CP {
                    theta,
                    control: control.unwrap_or(targets[0]),
                    target: targets[0],
                }
            }
            GateKind::Swap => {
                expect_targets(2)?;
                Gate::Swap {
                    a: targets[0],
                    b: targets[1],
                }
            }
            GateKind::Measure => Gate::Measure { targets },
        };

        gate.validate()?;
        Ok(gate)
    }

    /// Check the operand rules that the variant shape alone cannot express.
    pub fn validate(&self) -> IrResult<()> {
        let fail = |reason| Err(IrError::invalid_gate(self.name(), reason));

        let angle = match self {
            Gate::Rotation { angle, .. } => Some(angle.value()),
            Gate::CP { theta, .. } => Some(*theta),
            _ => None,
        };
        if let Some(v) = angle.filter(|v| !v.is_finite()) {
            return fail(InvalidGateReason::NonFiniteAngle(v));
        }

        match self {
            Gate::Single { targets, .. }
            | Gate::Rotation { targets, .. }
            | Gate::Measure { targets } => {
                if targets.is_empty() {
                    return fail(InvalidGateReason::EmptyTargets);
                }
            }
            Gate::CX { control, target } | Gate::CP { control, target, .. } => {
                if control == target {
                    return fail(InvalidGateReason::ControlIsTarget(*control));
                }
            }
            Gate::Swap { a, b } => {
                if a == b {
                    return fail(InvalidGateReason::DuplicateTarget(*a));
                }
            }
            Gate::Opaque(opaque) => {
                if opaque.qubits.is_empty() {
                    return fail(InvalidGateReason::EmptyTargets);
                }
            }
        }
        Ok(())
    }

    /// The kind of this gate, or `None` for an opaque gate.
    pub fn kind(&self) -> Option<GateKind> {
        match self {
            Gate::Single { kind, .. } => Some(kind.kind()),
            Gate::Rotation { axis, .. } => Some(axis.kind()),
            Gate::CX { .. } => Some(GateKind::CX),
            Gate::CP { .. } => Some(GateKind::CP),
            Gate::Swap { .. } => Some(GateKind::Swap),
            Gate::Measure { .. } => Some(GateKind::Measure),
            Gate::Opaque(_) => None,
        }
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        match self {
            Gate::Opaque(opaque) => &opaque.name,
            other => other.kind().map_or("", GateKind::name),
        }
    }

    /// The control qubit, for controlled gates.
    pub fn control(&self) -> Option<QubitId> {
        match self {
            Gate::CX { control, .. } | Gate::CP { control, .. } => Some(*control),
            _ => None,
        }
    }

    /// The target qubits, in order.
    pub fn targets(&self) -> Vec<QubitId> {
        match self {
            Gate::Single { targets, .. }
            | Gate::Rotation { targets, .. }
            | Gate::Measure { targets } => targets.clone(),
            Gate::CX { target, .. } | Gate::CP { target, .. } => vec![*target],
            Gate::Swap { a, b } => vec![*a, *b],
            Gate::Opaque(opaque) => opaque.qubits.clone(),
        }
    }

    /// Every qubit the gate references, control first.
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut qubits: Vec<_> = self.control().into_iter().collect();
        qubits.extend(self.targets());
        qubits
    }

    /// Whether the gate acts on each of its targets independently.
    pub fn is_broadcast(&self) -> bool {
        matches!(
            self,
            Gate::Single { .. } | Gate::Rotation { .. } | Gate::Measure { .. }
        )
    }

    /// Whether this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self, Gate::Measure { .. })
    }
}

/// Flat serialized form of a [`Gate`].
#[derive(Serialize)]
struct GateRecord<'a> {
    gate: &'a str,
    targets: Vec<QubitId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    control: Option<QubitId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<GateParams<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum GateParams<'a> {
    Named(BTreeMap<&'static str, f64>),
    Positional(&'a [f64]),
}

impl Serialize for Gate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params = match self {
            Gate::Rotation { angle, .. } => Some(GateParams::Named(BTreeMap::from([(
                angle.name(),
                angle.value(),
            )]))),
            Gate::CP { theta, .. } => Some(GateParams::Named(BTreeMap::from([("theta", *theta)]))),
            Gate::Opaque(opaque) if !opaque.params.is_empty() => {
                Some(GateParams::Positional(&opaque.params))
            }
            _ => None,
        };

        GateRecord {
            gate: self.name(),
            targets: self.targets(),
            control: self.control(),
            params,
        }
        .serialize(serializer)
    }
}

impl From<OpaqueGate> for Gate {
    fn from(gate: OpaqueGate) -> Self {
        Gate::Opaque(gate)
    }
}
