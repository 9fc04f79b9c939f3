//! Debug traversal and representation checks
//!
//! Nothing here is needed for correct arithmetic. These helpers walk a
//! matrix's stored entries to report on it, and to find or remove entries
//! that break the no-stored-zero invariant.

use spmath_core::{KernelError, Result, SparseElement, SparseMatrix, SparseMatrixMut};
use tracing::{debug, trace};

/// What a traversal saw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixSummary {
    /// Dimensions as (rows, cols)
    pub dims: (usize, usize),
    /// Number of stored entries
    pub nnz: usize,
    /// Stored entries whose value is exactly zero
    pub stored_zeros: usize,
    /// Smallest stored value, `None` when empty
    pub min: Option<f64>,
    /// Largest stored value, `None` when empty
    pub max: Option<f64>,
}

impl MatrixSummary {
    /// True if no stored zero was seen
    pub fn is_well_formed(&self) -> bool {
        self.stored_zeros == 0
    }
}

/// Walk every stored entry of `matrix`
///
/// Emits one `trace` event per entry and a `debug` summary.
pub fn inspect<M: SparseMatrix>(matrix: &M) -> MatrixSummary {
    let mut summary = MatrixSummary {
        dims: matrix.dimensions(),
        nnz: 0,
        stored_zeros: 0,
        min: None,
        max: None,
    };

    for (row, col, value) in matrix.entries() {
        trace!(row, col, value = ?value, "entry");
        summary.nnz += 1;
        if value.is_zero() {
            summary.stored_zeros += 1;
        }
        let v = value.to_f64();
        summary.min = Some(summary.min.map_or(v, |m| m.min(v)));
        summary.max = Some(summary.max.map_or(v, |m| m.max(v)));
    }

    debug!(
        rows = summary.dims.0,
        cols = summary.dims.1,
        nnz = summary.nnz,
        stored_zeros = summary.stored_zeros,
        "inspected matrix"
    );
    summary
}

/// Coordinates of every stored zero, sorted
pub fn stored_zeros<M: SparseMatrix>(matrix: &M) -> Vec<(usize, usize)> {
    let mut zeros: Vec<_> = matrix
        .entries()
        .filter(|(_, _, value)| value.is_zero())
        .map(|(row, col, _)| (row, col))
        .collect();
    zeros.sort_unstable();
    zeros
}

/// Fail with [`KernelError::StoredZero`] if `matrix` stores a zero
///
/// The reported coordinate is the smallest offending one.
pub fn check_representation<M: SparseMatrix>(matrix: &M) -> Result<()> {
    match stored_zeros(matrix).first() {
        Some(&(row, col)) => Err(KernelError::StoredZero { row, col }),
        None => Ok(()),
    }
}

/// Erase every stored zero, returning how many were removed
pub fn prune_zeros<M: SparseMatrixMut>(matrix: &mut M) -> usize {
    let zeros = stored_zeros(matrix);
    for &(row, col) in &zeros {
        matrix.erase(row, col);
    }
    zeros.len()
}
