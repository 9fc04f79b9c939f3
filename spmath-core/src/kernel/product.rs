//! Sparse vector products
//!
//! `vector_matrix_multiply` computes `v^T * A` and is the only kernel
//! operation that prunes zeros as it goes. `dot_product` is a pure
//! reduction over the first operand's entries.

use crate::traits::{SparseElement, SparseMatrix, SparseMatrixMut};
use crate::validation::{validate_empty, validate_output_rows, validate_rows_match};
use crate::Result;

/// Multiply an N x 1 vector with an N x M matrix, `output = vector^T * matrix`
///
/// `output` must be an empty M x 1 vector. After every single
/// accumulation, an output entry that became exactly zero is erased, so no
/// stored zero survives even transiently. A later contribution may add the
/// entry back.
pub fn vector_matrix_multiply<V, M, O>(vector: &V, matrix: &M, output: &mut O) -> Result<()>
where
    V: SparseMatrix,
    M: SparseMatrix<Element = V::Element>,
    O: SparseMatrixMut<Element = V::Element>,
{
    validate_rows_match(matrix.nrows(), vector.nrows())?;
    validate_output_rows((matrix.ncols(), 1), output.dimensions())?;
    validate_empty(output.nnz())?;

    for (row, col, value) in matrix.entries() {
        // Absent weight contributes exactly zero
        let Some(weight) = vector.get_element(row, 0) else {
            continue;
        };
        if output.accumulate(col, 0, weight * value)?.is_zero() {
            output.erase(col, 0);
        }
    }
    Ok(())
}

/// Dot product of two N x 1 vectors
///
/// Only `vector1`'s entries are visited; an entry missing from `vector2`
/// contributes zero.
pub fn dot_product<A, B>(vector1: &A, vector2: &B) -> Result<A::Element>
where
    A: SparseMatrix,
    B: SparseMatrix<Element = A::Element>,
{
    validate_rows_match(vector1.nrows(), vector2.nrows())?;

    let mut sum = <A::Element as SparseElement>::ZERO;
    for (row, _, value) in vector1.entries() {
        if let Some(other) = vector2.get_element(row, 0) {
            sum = sum + value * other;
        }
    }
    Ok(sum)
}
