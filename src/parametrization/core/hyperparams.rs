//! Hyperparameters — the fixed structure shared by every parameter set.
//!
//! Hyperparameters capture *which* angles exist, never their values: the
//! register, the qubits carrying a nonzero single-qubit weight, and the qubit
//! pairs carrying a nonzero coupling weight, each with its weight. They are
//! derived once from a [`CostSpecification`] and never mutated afterwards.
//!
//! ## Ordering
//! - `register`: ascending qubit labels.
//! - `qubits_singles` / `single_weights`: ascending qubit labels.
//! - `qubits_pairs` / `pair_weights`: ascending `(min, max)` pairs.
//!
//! These orders fix the column layout of every per-term angle array and of
//! the Extended raw vector and constraint list.
use crate::cost::CostSpecification;
use ndarray::Array1;

/// Register and nonzero-weight terms derived from a cost specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperparameters {
    /// Qubit labels in ascending order.
    pub register: Vec<usize>,
    /// Qubits with a nonzero single-qubit weight.
    pub qubits_singles: Vec<usize>,
    /// Weights aligned with `qubits_singles`.
    pub single_weights: Array1<f64>,
    /// Pairs `(min, max)` with a nonzero coupling weight.
    pub qubits_pairs: Vec<(usize, usize)>,
    /// Weights aligned with `qubits_pairs`.
    pub pair_weights: Array1<f64>,
}

impl Hyperparameters {
    /// Derive hyperparameters from a validated specification.
    ///
    /// Terms whose (summed) weight is exactly zero are dropped: they generate
    /// no rotation and would make periodicity bounds undefined.
    pub fn from_cost(spec: &CostSpecification) -> Hyperparameters {
        let (qubits_singles, singles): (Vec<usize>, Vec<f64>) =
            spec.single_weights().iter().filter(|(_, w)| **w != 0.0).map(|(&q, &w)| (q, w)).unzip();
        let (qubits_pairs, pairs): (Vec<(usize, usize)>, Vec<f64>) =
            spec.pair_weights().iter().filter(|(_, w)| **w != 0.0).map(|(&p, &w)| (p, w)).unzip();
        Hyperparameters {
            register: spec.register().to_vec(),
            qubits_singles,
            single_weights: Array1::from_vec(singles),
            qubits_pairs,
            pair_weights: Array1::from_vec(pairs),
        }
    }

    /// Number of qubits (mixer rotations per timestep).
    pub fn n_qubits(&self) -> usize {
        self.register.len()
    }

    /// Number of single-qubit cost terms.
    pub fn n_singles(&self) -> usize {
        self.qubits_singles.len()
    }

    /// Number of pairwise cost terms.
    pub fn n_pairs(&self) -> usize {
        self.qubits_pairs.len()
    }
}

/// Derive the hyperparameters of a cost specification.
///
/// Validation happens when the [`CostSpecification`] is built, so this never
/// fails; see [`Hyperparameters::from_cost`].
pub fn derive_hyperparameters(spec: &CostSpecification) -> Hyperparameters {
    Hyperparameters::from_cost(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that zero-weight terms are dropped while the register is kept.
    //
    // Given
    // -----
    // - Register `[0, 1, 2]`, singles {0: 0.0, 1: −0.5}, pairs
    //   {(0,1): 0.7, (1,2): 0.3, (2,1): −0.3}.
    //
    // Expect
    // ------
    // - Singles `[1]` with weight −0.5; pairs `[(0, 1)]` with weight 0.7;
    //   register unchanged.
    fn from_cost_drops_zero_weight_terms() {
        // Arrange
        let spec = CostSpecification::new(
            vec![0, 1, 2],
            &[(0, 0.0), (1, -0.5)],
            &[((0, 1), 0.7), ((1, 2), 0.3), ((2, 1), -0.3)],
        )
        .expect("valid spec");

        // Act
        let hyper = derive_hyperparameters(&spec);

        // Assert
        assert_eq!(hyper.register, vec![0, 1, 2]);
        assert_eq!(hyper.qubits_singles, vec![1]);
        assert_eq!(hyper.single_weights, array![-0.5]);
        assert_eq!(hyper.qubits_pairs, vec![(0, 1)]);
        assert_eq!(hyper.pair_weights, array![0.7]);
        assert_eq!((hyper.n_qubits(), hyper.n_singles(), hyper.n_pairs()), (3, 1, 1));
    }
}
