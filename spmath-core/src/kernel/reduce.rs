//! Row-sum reduction

use crate::traits::{SparseMatrix, SparseMatrixMut};
use crate::Result;

/// Sum across the rows of an N x M matrix into an N x 1 accumulator
///
/// Every stored `(r, c, v)` adds `v` to `output[r][0]`. `output` is added
/// into, not reset, and its dimensions are not checked here; a row beyond
/// the output's bounds surfaces as the storage's `IndexOutOfBounds` after
/// earlier rows were already accumulated.
///
/// Partial sums that cancel to exactly zero are left stored. Use
/// `spmath::Kernel` with row-sum pruning enabled if that matters.
pub fn sum_rows<M, O>(matrix: &M, output: &mut O) -> Result<()>
where
    M: SparseMatrix,
    O: SparseMatrixMut<Element = M::Element>,
{
    for (row, _, value) in matrix.entries() {
        output.accumulate(row, 0, value)?;
    }
    Ok(())
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::{sorted_entries, HashSparseMatrix, KernelError};
    use alloc::vec;

    #[test]
    fn test_sum_rows() {
        let m = HashSparseMatrix::from_triplets(
            4,
            3,
            vec![(0, 0, 1.0f32), (0, 2, 2.0), (2, 1, -3.0), (3, 0, 0.5), (3, 2, 0.25)],
        )
        .unwrap();
        let mut out = HashSparseMatrix::column_vector(4);
        sum_rows(&m, &mut out).unwrap();

        // Row 1 has no entries and stays absent
        assert_eq!(sorted_entries(&out), vec![(0, 0, 3.0), (2, 0, -3.0), (3, 0, 0.75)]);
    }

    #[test]
    fn test_sum_rows_accumulates_into_existing_output() {
        let m = HashSparseMatrix::from_triplets(2, 2, vec![(0, 1, 2.0f64), (1, 1, 1.0)])
            .unwrap();
        let mut out = HashSparseMatrix::from_column(2, vec![(0, 10.0)]).unwrap();
        sum_rows(&m, &mut out).unwrap();
        assert_eq!(out.value(0, 0), 12.0);
        assert_eq!(out.value(1, 0), 1.0);
    }

    #[test]
    fn test_sum_rows_keeps_cancelled_zero() {
        let m = HashSparseMatrix::from_triplets(1, 2, vec![(0, 0, 4.0f32), (0, 1, -4.0)])
            .unwrap();
        let mut out = HashSparseMatrix::column_vector(1);
        sum_rows(&m, &mut out).unwrap();
        assert_eq!(out.get_element(0, 0), Some(0.0));
    }

    #[test]
    fn test_sum_rows_empty_input() {
        let m = HashSparseMatrix::<f32>::new(5, 5);
        let mut out = HashSparseMatrix::column_vector(5);
        sum_rows(&m, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_sum_rows_output_too_short() {
        let m = HashSparseMatrix::from_triplets(3, 1, vec![(2, 0, 1.0f32)]).unwrap();
        let mut out = HashSparseMatrix::column_vector(2);
        assert_eq!(
            sum_rows(&m, &mut out),
            Err(KernelError::IndexOutOfBounds { row: 2, col: 0 })
        );
    }
}
