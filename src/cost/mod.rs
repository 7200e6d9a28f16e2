//! cost — QUBO / Ising cost specifications.
//!
//! Purpose
//! -------
//! Describe the problem Hamiltonian the way the parametrization layer sees
//! it: a register of qubit labels plus single-qubit and pairwise weights.
//! Provide small classical utilities (exhaustive evaluation, brute-force
//! minimum, QUBO → Ising rewrite) for reference checks on small registers.
//!
//! Key behaviors
//! -------------
//! - Validate registers and terms once, at construction, so downstream code
//!   can assume a consistent specification ([`CostSpecification`]).
//! - Sum duplicated terms and normalize pair orientation.
//! - Evaluate binary and spin assignments and enumerate all of them for
//!   registers up to [`MAX_ENUMERATION_QUBITS`].
//!
//! Conventions
//! -----------
//! - Integer assignments store the `i`-th register qubit in bit `i`.
//! - This module performs no logging or I/O.

pub mod qubo;
pub mod specification;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::qubo::{MAX_ASSIGNMENT_QUBITS, MAX_ENUMERATION_QUBITS};
pub use self::specification::CostSpecification;
