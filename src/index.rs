//! Bit-level indexing utilities for qubit registers.
//!
//! Register position 0 is the most significant bit of a flat state vector
//! index (row-major ordering), so for `n` qubits the bit of position `loc`
//! has weight `2^(n - 1 - loc)`.

use crate::error::{QftError, Result};

/// Hilbert space dimension `2^n` for an `n`-qubit register.
///
/// Fails when `2^n × 2^n` dense matrices could not be indexed with `usize`.
///
/// # Example
/// ```
/// use qft_rs::index::dim_for_qubits;
/// assert_eq!(dim_for_qubits(3).unwrap(), 8);
/// assert!(dim_for_qubits(64).is_err());
/// ```
pub fn dim_for_qubits(n_qubits: usize) -> Result<usize> {
    if n_qubits >= (usize::BITS / 2) as usize {
        return Err(QftError::invalid_input(format!(
            "{} qubits exceeds the supported maximum of {}",
            n_qubits,
            usize::BITS / 2 - 1
        )));
    }
    Ok(1usize << n_qubits)
}

/// Number of qubits represented by a state vector of length `dim`.
///
/// # Example
/// ```
/// use qft_rs::index::num_qubits_for_dim;
/// assert_eq!(num_qubits_for_dim(1).unwrap(), 0);
/// assert_eq!(num_qubits_for_dim(16).unwrap(), 4);
/// assert!(num_qubits_for_dim(3).is_err());
/// ```
pub fn num_qubits_for_dim(dim: usize) -> Result<usize> {
    if !dim.is_power_of_two() {
        return Err(QftError::invalid_input(format!(
            "state vector length {} is not a power of 2",
            dim
        )));
    }
    Ok(dim.trailing_zeros() as usize)
}

/// Mask selecting the bit of register position `loc` in an `n`-qubit index.
///
/// # Example
/// ```
/// use qft_rs::index::bit_mask;
/// // 3 qubits: position 0 is the MSB (weight 4), position 2 the LSB
/// assert_eq!(bit_mask(0, 3), 0b100);
/// assert_eq!(bit_mask(2, 3), 0b001);
/// ```
pub fn bit_mask(loc: usize, n_qubits: usize) -> usize {
    debug_assert!(loc < n_qubits, "location {} out of range for {} qubits", loc, n_qubits);
    1usize << (n_qubits - 1 - loc)
}

/// Reverse the lowest `n_qubits` bits of `index`.
///
/// # Example
/// ```
/// use qft_rs::index::reverse_bits;
/// assert_eq!(reverse_bits(0b001, 3), 0b100);
/// assert_eq!(reverse_bits(0b110, 3), 0b011);
/// assert_eq!(reverse_bits(0, 0), 0);
/// ```
pub fn reverse_bits(index: usize, n_qubits: usize) -> usize {
    if n_qubits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS as usize - n_qubits)
}

/// Iterate over flat indices whose bits at `fixed_locs` equal `fixed_vals`.
///
/// Used by the controlled kernels: only amplitudes with the control bits set
/// are touched.
///
/// # Example
/// ```
/// use qft_rs::index::iter_basis_fixed;
/// // 2 qubits, fix position 0 to 1: only |10> and |11> match
/// let indices: Vec<_> = iter_basis_fixed(2, &[0], &[true]).collect();
/// assert_eq!(indices, vec![2, 3]);
/// ```
pub fn iter_basis_fixed(
    n_qubits: usize,
    fixed_locs: &[usize],
    fixed_vals: &[bool],
) -> impl Iterator<Item = usize> {
    debug_assert_eq!(
        fixed_locs.len(),
        fixed_vals.len(),
        "fixed_locs and fixed_vals must have the same length"
    );

    let mut mask = 0usize;
    let mut pattern = 0usize;
    for (&loc, &val) in fixed_locs.iter().zip(fixed_vals.iter()) {
        let bit = bit_mask(loc, n_qubits);
        mask |= bit;
        if val {
            pattern |= bit;
        }
    }
    (0..1usize << n_qubits).filter(move |&i| i & mask == pattern)
}
