//! Classical evaluation of a cost specification over bit assignments.
//!
//! Assignments are encoded as integers: bit `i` holds the value of the
//! `i`-th register qubit (ascending label order), so the last register qubit
//! is the most significant bit. For binary (QUBO) variables a set bit means
//! `x = 1`; for spin (Ising) variables a set bit means `s = −1`, i.e.
//! `s = 1 − 2x`.
//!
//! These routines are exhaustive and only intended for small registers
//! (reference minima, sanity checks of an optimizer's output); enumeration is
//! capped at [`MAX_ENUMERATION_QUBITS`].
use crate::{
    cost::specification::CostSpecification,
    parametrization::errors::{ParamError, ParamResult},
};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Largest register that [`CostSpecification::evaluate_all`] and
/// [`CostSpecification::brute_force_minimum`] will enumerate.
pub const MAX_ENUMERATION_QUBITS: usize = 24;

/// Largest register an integer assignment can address.
pub const MAX_ASSIGNMENT_QUBITS: usize = u64::BITS as usize;

impl CostSpecification {
    /// Value of the weighted sum for a binary assignment.
    ///
    /// `y(x) = Σ h_i x_i + Σ J_ij x_i x_j` with `x_i ∈ {0, 1}`.
    ///
    /// # Errors
    /// - [`ParamError::RegisterTooLarge`] above [`MAX_ASSIGNMENT_QUBITS`].
    /// - [`ParamError::AssignmentOutOfRange`] if `assignment` has bits set
    ///   beyond the register.
    pub fn evaluate(&self, assignment: u64) -> ParamResult<f64> {
        self.check_assignment(assignment)?;
        Ok(self.evaluate_with(assignment, |bit| if bit { 1.0 } else { 0.0 }))
    }

    /// Value of the weighted sum for a spin assignment.
    ///
    /// `E(s) = Σ h_i s_i + Σ J_ij s_i s_j` with `s_i = 1 − 2·bit_i`.
    ///
    /// # Errors
    /// - [`ParamError::RegisterTooLarge`] above [`MAX_ASSIGNMENT_QUBITS`].
    /// - [`ParamError::AssignmentOutOfRange`] if `assignment` has bits set
    ///   beyond the register.
    pub fn evaluate_spins(&self, assignment: u64) -> ParamResult<f64> {
        self.check_assignment(assignment)?;
        Ok(self.evaluate_with(assignment, |bit| if bit { -1.0 } else { 1.0 }))
    }

    /// Binary values of every assignment `0..2^n` in integer order.
    ///
    /// # Errors
    /// [`ParamError::RegisterTooLarge`] above [`MAX_ENUMERATION_QUBITS`].
    pub fn evaluate_all(&self) -> ParamResult<Array1<f64>> {
        let n = self.n_qubits();
        if n > MAX_ENUMERATION_QUBITS {
            return Err(ParamError::RegisterTooLarge { n_qubits: n, max: MAX_ENUMERATION_QUBITS });
        }
        let values = (0..1u64 << n)
            .map(|k| self.evaluate_with(k, |bit| if bit { 1.0 } else { 0.0 }))
            .collect();
        Ok(Array1::from_vec(values))
    }

    /// Assignment with the smallest binary value, and that value.
    ///
    /// Ties resolve to the smallest assignment.
    ///
    /// # Errors
    /// [`ParamError::RegisterTooLarge`] above [`MAX_ENUMERATION_QUBITS`].
    pub fn brute_force_minimum(&self) -> ParamResult<(u64, f64)> {
        let values = self.evaluate_all()?;
        let (best, value) = values
            .iter()
            .enumerate()
            .fold((0usize, f64::INFINITY), |acc, (k, &v)| if v < acc.1 { (k, v) } else { acc });
        Ok((best as u64, value))
    }

    /// Rewrite a binary (QUBO) specification in spin form.
    ///
    /// Substitutes `x_i = (1 − s_i)/2` and returns the Ising specification
    /// together with the constant offset, so that for every assignment `k`
    /// `ising.evaluate_spins(k) + offset == self.evaluate(k)`.
    pub fn to_ising(&self) -> (CostSpecification, f64) {
        let mut singles: BTreeMap<usize, f64> = BTreeMap::new();
        let mut pairs: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        let mut offset = 0.0;

        for (&qubit, &h) in &self.singles {
            *singles.entry(qubit).or_insert(0.0) -= 0.5 * h;
            offset += 0.5 * h;
        }
        for (&(i, j), &w) in &self.pairs {
            *pairs.entry((i, j)).or_insert(0.0) += 0.25 * w;
            *singles.entry(i).or_insert(0.0) -= 0.25 * w;
            *singles.entry(j).or_insert(0.0) -= 0.25 * w;
            offset += 0.25 * w;
        }

        let ising = CostSpecification { register: self.register.clone(), singles, pairs };
        (ising, offset)
    }

    // ---- Helper Methods ----

    fn check_assignment(&self, assignment: u64) -> ParamResult<()> {
        let n = self.n_qubits();
        if n > MAX_ASSIGNMENT_QUBITS {
            return Err(ParamError::RegisterTooLarge { n_qubits: n, max: MAX_ASSIGNMENT_QUBITS });
        }
        if n < MAX_ASSIGNMENT_QUBITS && assignment >> n != 0 {
            return Err(ParamError::AssignmentOutOfRange { assignment, n_qubits: n });
        }
        Ok(())
    }

    /// Accumulate the weighted sum with `var` mapping a bit to its variable value.
    fn evaluate_with<F: Fn(bool) -> f64>(&self, assignment: u64, var: F) -> f64 {
        let value_of = |qubit: usize| -> f64 {
            let pos = self.position(qubit).unwrap_or(0);
            var((assignment >> pos) & 1 == 1)
        };
        let single: f64 = self.singles.iter().map(|(&q, &h)| h * value_of(q)).sum();
        let pair: f64 =
            self.pairs.iter().map(|(&(i, j), &w)| w * value_of(i) * value_of(j)).sum();
        single + pair
    }
}
