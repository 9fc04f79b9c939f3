//! Diagonal update and elementwise negation

use crate::traits::{SparseMatrix, SparseMatrixMut};
use crate::validation::{validate_output_dims, validate_rows_match, validate_square};
use crate::Result;

/// Add an N x 1 vector to the diagonal of an N x N matrix
///
/// Returns a deep copy of `matrix` with `diag[i][0]` added to entry
/// `(i, i)` for every stored `i`. To subtract, pass a negated `diag`.
/// Diagonal entries that cancel to zero are left stored.
pub fn add_diagonal<M, D>(matrix: &M, diag: &D) -> Result<M>
where
    M: SparseMatrixMut + Clone,
    D: SparseMatrix<Element = M::Element>,
{
    validate_square(matrix.dimensions())?;
    validate_rows_match(matrix.nrows(), diag.nrows())?;

    let mut output = matrix.clone();
    for (index, _, value) in diag.entries() {
        output.accumulate(index, index, value)?;
    }
    Ok(output)
}

/// Write the negation of every stored entry of `matrix` into `output`
///
/// Entries are overwritten, not accumulated. `output` must have the same
/// dimensions as `matrix`; entries of `output` at coordinates not stored
/// in `matrix` are left alone.
pub fn negate<M, O>(matrix: &M, output: &mut O) -> Result<()>
where
    M: SparseMatrix,
    O: SparseMatrixMut<Element = M::Element>,
{
    validate_output_dims(matrix.dimensions(), output.dimensions())?;

    for (row, col, value) in matrix.entries() {
        output.insert(row, col, -value)?;
    }
    Ok(())
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::{sorted_entries, HashSparseMatrix, KernelError};
    use alloc::vec;

    fn sample_square() -> HashSparseMatrix<f32> {
        HashSparseMatrix::from_triplets(
            3,
            3,
            vec![(0, 0, 2.0), (0, 1, -1.0), (1, 0, -1.0), (2, 2, 4.0), (1, 2, 0.5)],
        )
        .unwrap()
    }

    #[test]
    fn test_add_diagonal() {
        let a = sample_square();
        let d = HashSparseMatrix::from_column(3, vec![(0, 1.0), (1, 3.0)]).unwrap();
        let out = add_diagonal(&a, &d).unwrap();

        assert_eq!(
            sorted_entries(&out),
            vec![
                (0, 0, 3.0),
                (0, 1, -1.0),
                (1, 0, -1.0),
                (1, 1, 3.0),
                (1, 2, 0.5),
                (2, 2, 4.0),
            ]
        );
    }

    #[test]
    fn test_add_diagonal_output_does_not_alias_input() {
        let a = sample_square();
        let d = HashSparseMatrix::column_vector(3);
        let mut out = add_diagonal(&a, &d).unwrap();
        assert_eq!(out, a);

        out.accumulate(0, 0, 100.0).unwrap();
        out.erase(2, 2);
        assert_eq!(a.value(0, 0), 2.0);
        assert_eq!(a.value(2, 2), 4.0);
    }

    #[test]
    fn test_add_diagonal_keeps_cancelled_zero() {
        let a = sample_square();
        let d = HashSparseMatrix::from_column(3, vec![(2, -4.0)]).unwrap();
        let out = add_diagonal(&a, &d).unwrap();
        assert_eq!(out.get_element(2, 2), Some(0.0));
    }

    #[test]
    fn test_add_diagonal_preconditions() {
        let rect = HashSparseMatrix::<f32>::new(3, 2);
        let d = HashSparseMatrix::column_vector(3);
        assert_eq!(
            add_diagonal(&rect, &d),
            Err(KernelError::NotSquare { rows: 3, cols: 2 })
        );

        let a = sample_square();
        let short = HashSparseMatrix::column_vector(2);
        assert_eq!(
            add_diagonal(&a, &short),
            Err(KernelError::RowMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_negate_involution() {
        let a = sample_square();
        let mut b = HashSparseMatrix::new(3, 3);
        let mut c = HashSparseMatrix::new(3, 3);
        negate(&a, &mut b).unwrap();
        negate(&b, &mut c).unwrap();

        assert_eq!(b.value(0, 1), 1.0);
        assert_eq!(b.value(2, 2), -4.0);
        assert_eq!(c, a);
    }

    #[test]
    fn test_negate_overwrites() {
        let a = HashSparseMatrix::from_triplets(2, 2, vec![(0, 0, 3.0f64)]).unwrap();
        let mut out = HashSparseMatrix::from_triplets(2, 2, vec![(0, 0, 10.0), (1, 1, 1.0)])
            .unwrap();
        negate(&a, &mut out).unwrap();
        assert_eq!(sorted_entries(&out), vec![(0, 0, -3.0), (1, 1, 1.0)]);
    }

    #[test]
    fn test_negate_shape_and_empty() {
        let a = HashSparseMatrix::<f32>::new(2, 3);
        let mut wrong = HashSparseMatrix::new(3, 2);
        assert_eq!(
            negate(&a, &mut wrong),
            Err(KernelError::OutputShapeMismatch {
                expected: (2, 3),
                found: (3, 2)
            })
        );

        let mut out = HashSparseMatrix::new(2, 3);
        negate(&a, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
