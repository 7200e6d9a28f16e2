//! Cost specification — weighted sums of single and pairwise binary terms.
//!
//! This module provides [`CostSpecification`], the only view of a problem
//! Hamiltonian that the parametrization layer needs: an ordered register of
//! qubit labels, one weight per single-qubit ("bias") term, and one weight per
//! unordered qubit pair ("coupling") term. How the specification was built
//! (Pauli sums, adjacency lists, QUBO matrices) is irrelevant here.
//!
//! ## Invariants validated by constructors
//! - The register is non-empty and holds each label at most once; it is
//!   stored sorted ascending.
//! - Every term references qubits that belong to the register.
//! - Pairwise terms couple two distinct qubits; `(i, j)` and `(j, i)` denote
//!   the same term and are stored as `(min, max)`.
//! - All weights are finite.
//!
//! ## Duplicate terms
//! Terms supplied more than once (including a pair given in both
//! orientations) are summed into a single weight. A sum of exactly zero is
//! kept here and dropped later by
//! [`Hyperparameters::from_cost`](crate::parametrization::core::Hyperparameters::from_cost).
use crate::parametrization::errors::{ParamError, ParamResult};
use std::collections::BTreeMap;

/// Register plus single and pairwise weights of a QUBO / Ising cost.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSpecification {
    /// Sorted, duplicate-free qubit labels.
    pub(crate) register: Vec<usize>,
    /// Qubit → weight of its single term.
    pub(crate) singles: BTreeMap<usize, f64>,
    /// Normalized pair `(min, max)` → weight of its coupling term.
    pub(crate) pairs: BTreeMap<(usize, usize), f64>,
}

impl CostSpecification {
    /// Create a validated specification over an explicit register.
    ///
    /// The register may contain qubits without any term (idle qubits); they
    /// still receive mixer angles downstream.
    ///
    /// # Errors
    /// - [`ParamError::EmptyRegister`] if `register` is empty.
    /// - [`ParamError::DuplicateQubit`] if a label appears twice.
    /// - [`ParamError::QubitNotInRegister`] if a term references an unknown qubit.
    /// - [`ParamError::SelfCoupling`] if a pair couples a qubit with itself.
    /// - [`ParamError::NonFiniteSingleWeight`] / [`ParamError::NonFinitePairWeight`]
    ///   for NaN/±inf weights.
    pub fn new(
        register: Vec<usize>, singles: &[(usize, f64)], pairs: &[((usize, usize), f64)],
    ) -> ParamResult<Self> {
        let register = validate_register(register)?;
        let singles = collect_singles(&register, singles)?;
        let pairs = collect_pairs(&register, pairs)?;
        Ok(CostSpecification { register, singles, pairs })
    }

    /// Create a validated specification whose register is the set of qubits
    /// referenced by the terms.
    ///
    /// # Errors
    /// Same as [`CostSpecification::new`]; an empty term list yields
    /// [`ParamError::EmptyRegister`].
    pub fn from_terms(
        singles: &[(usize, f64)], pairs: &[((usize, usize), f64)],
    ) -> ParamResult<Self> {
        let mut register: Vec<usize> = singles
            .iter()
            .map(|&(q, _)| q)
            .chain(pairs.iter().flat_map(|&((i, j), _)| [i, j]))
            .collect();
        register.sort_unstable();
        register.dedup();
        CostSpecification::new(register, singles, pairs)
    }

    /// Register labels in ascending order.
    pub fn register(&self) -> &[usize] {
        &self.register
    }

    /// Number of qubits in the register.
    pub fn n_qubits(&self) -> usize {
        self.register.len()
    }

    /// Single-term weights keyed by qubit label.
    pub fn single_weights(&self) -> &BTreeMap<usize, f64> {
        &self.singles
    }

    /// Pair-term weights keyed by normalized `(min, max)` pairs.
    pub fn pair_weights(&self) -> &BTreeMap<(usize, usize), f64> {
        &self.pairs
    }

    /// Weight of the single term on `qubit`, `0.0` when absent.
    pub fn single_weight(&self, qubit: usize) -> f64 {
        self.singles.get(&qubit).copied().unwrap_or(0.0)
    }

    /// Weight of the coupling between `i` and `j` in either order, `0.0` when absent.
    pub fn pair_weight(&self, i: usize, j: usize) -> f64 {
        self.pairs.get(&normalize_pair(i, j)).copied().unwrap_or(0.0)
    }

    /// Position of `qubit` inside the register.
    pub fn position(&self, qubit: usize) -> Option<usize> {
        self.register.binary_search(&qubit).ok()
    }
}

// ---- Helper Methods ----

fn normalize_pair(i: usize, j: usize) -> (usize, usize) {
    if i <= j { (i, j) } else { (j, i) }
}

/// Sort the register and reject empty or duplicated labels.
fn validate_register(mut register: Vec<usize>) -> ParamResult<Vec<usize>> {
    if register.is_empty() {
        return Err(ParamError::EmptyRegister);
    }
    register.sort_unstable();
    if let Some(w) = register.windows(2).find(|w| w[0] == w[1]) {
        return Err(ParamError::DuplicateQubit { qubit: w[0] });
    }
    Ok(register)
}

fn check_member(register: &[usize], qubit: usize) -> ParamResult<()> {
    if register.binary_search(&qubit).is_err() {
        return Err(ParamError::QubitNotInRegister { qubit });
    }
    Ok(())
}

/// Validate single terms and sum duplicates.
fn collect_singles(
    register: &[usize], singles: &[(usize, f64)],
) -> ParamResult<BTreeMap<usize, f64>> {
    let mut out = BTreeMap::new();
    for &(qubit, value) in singles {
        if !value.is_finite() {
            return Err(ParamError::NonFiniteSingleWeight { qubit, value });
        }
        check_member(register, qubit)?;
        *out.entry(qubit).or_insert(0.0) += value;
    }
    Ok(out)
}

/// Validate pair terms, normalize their orientation and sum duplicates.
fn collect_pairs(
    register: &[usize], pairs: &[((usize, usize), f64)],
) -> ParamResult<BTreeMap<(usize, usize), f64>> {
    let mut out = BTreeMap::new();
    for &((i, j), value) in pairs {
        if !value.is_finite() {
            return Err(ParamError::NonFinitePairWeight { pair: (i, j), value });
        }
        if i == j {
            return Err(ParamError::SelfCoupling { qubit: i });
        }
        check_member(register, i)?;
        check_member(register, j)?;
        *out.entry(normalize_pair(i, j)).or_insert(0.0) += value;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Register inference, sorting and duplicate detection.
    // - Rejection of malformed terms (unknown qubits, self-coupling,
    //   non-finite weights).
    // - Summation of duplicated and reversed pair terms.
    //
    // They intentionally DO NOT cover:
    // - QUBO evaluation and Ising conversion (see `cost::qubo`).
    // - Hyperparameter derivation (see `parametrization::core::hyperparams`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `from_terms` infers a sorted register from the terms.
    //
    // Given
    // -----
    // - Singles on qubits 4 and 1, a pair (2, 0).
    //
    // Expect
    // ------
    // - Register `[0, 1, 2, 4]`; pair stored as `(0, 2)`.
    fn from_terms_infers_sorted_register() {
        // Arrange / Act
        let spec = CostSpecification::from_terms(&[(4, 1.0), (1, -2.0)], &[((2, 0), 0.5)])
            .expect("valid terms");

        // Assert
        assert_eq!(spec.register(), &[0, 1, 2, 4]);
        assert_eq!(spec.pair_weight(0, 2), 0.5);
        assert_eq!(spec.pair_weight(2, 0), 0.5);
        assert_eq!(spec.single_weight(3), 0.0);
        assert_eq!(spec.position(4), Some(3));
    }

    #[test]
    // Purpose
    // -------
    // Ensure duplicated pairs in both orientations are summed.
    //
    // Given
    // -----
    // - Pair (0, 1) with weight 0.25 and pair (1, 0) with weight 0.5.
    //
    // Expect
    // ------
    // - A single pair term `(0, 1)` with weight 0.75.
    fn duplicate_pairs_are_summed() {
        // Arrange / Act
        let spec = CostSpecification::from_terms(&[], &[((0, 1), 0.25), ((1, 0), 0.5)])
            .expect("valid terms");

        // Assert
        assert_eq!(spec.pair_weights().len(), 1);
        assert_eq!(spec.pair_weight(0, 1), 0.75);
    }

    #[test]
    // Purpose
    // -------
    // Check every malformed-specification path.
    //
    // Given
    // -----
    // - Empty register, duplicate register entry, unknown qubit,
    //   self-coupling, non-finite weights.
    //
    // Expect
    // ------
    // - The matching `ParamError` variant for each case.
    fn malformed_specifications_are_rejected() {
        assert_eq!(
            CostSpecification::from_terms(&[], &[]).unwrap_err(),
            ParamError::EmptyRegister
        );
        assert_eq!(
            CostSpecification::new(vec![0, 1, 1], &[], &[]).unwrap_err(),
            ParamError::DuplicateQubit { qubit: 1 }
        );
        assert_eq!(
            CostSpecification::new(vec![0, 1], &[(2, 1.0)], &[]).unwrap_err(),
            ParamError::QubitNotInRegister { qubit: 2 }
        );
        assert_eq!(
            CostSpecification::from_terms(&[], &[((3, 3), 1.0)]).unwrap_err(),
            ParamError::SelfCoupling { qubit: 3 }
        );
        assert!(matches!(
            CostSpecification::from_terms(&[(0, f64::NAN)], &[]).unwrap_err(),
            ParamError::NonFiniteSingleWeight { qubit: 0, .. }
        ));
        assert!(matches!(
            CostSpecification::from_terms(&[], &[((0, 1), f64::INFINITY)]).unwrap_err(),
            ParamError::NonFinitePairWeight { pair: (0, 1), .. }
        ));
    }

    #[test]
    // Purpose
    // -------
    // Confirm explicit registers may contain idle qubits.
    //
    // Given
    // -----
    // - Register `[5, 0, 2]` with a single term on qubit 0 only.
    //
    // Expect
    // ------
    // - Register is sorted and all three qubits are kept.
    fn explicit_register_keeps_idle_qubits() {
        // Arrange / Act
        let spec = CostSpecification::new(vec![5, 0, 2], &[(0, 1.0)], &[]).expect("valid spec");

        // Assert
        assert_eq!(spec.register(), &[0, 2, 5]);
        assert_eq!(spec.n_qubits(), 3);
    }
}
