//! Configured, logged execution of the kernel operations
//!
//! [`Kernel`] runs the `spmath_core` operations unchanged and adds what
//! the pipeline wants around them: `tracing` events, optional row-sum
//! pruning, optional representation checks and optional entry tracing.

use spmath_core::{kernel, KernelError, Result, SparseMatrix, SparseMatrixMut};
use tracing::{debug, warn};

use crate::config::KernelConfig;
use crate::diagnostics;

/// Kernel operations bound to a [`KernelConfig`]
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    /// Create a kernel with the given configuration
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Row sums of `matrix` added into the N x 1 accumulator `output`
    ///
    /// With `prune_row_sums` set, sums that cancelled to exactly zero are
    /// erased afterwards and the output counts as a pruned result.
    pub fn sum_rows<M, O>(&self, matrix: &M, output: &mut O) -> Result<()>
    where
        M: SparseMatrix,
        O: SparseMatrixMut<Element = M::Element>,
    {
        let (rows, cols) = matrix.dimensions();
        debug!(rows, cols, nnz = matrix.nnz(), "sum_rows");

        kernel::sum_rows(matrix, output).map_err(|e| rejected("sum_rows", e))?;

        if self.config.prune_row_sums {
            let pruned = diagnostics::prune_zeros(output);
            if pruned > 0 {
                debug!(pruned, "pruned cancelled row sums");
            }
        }
        self.finish("sum_rows", output, self.config.prune_row_sums)
    }

    /// `output = vector^T * matrix` into an empty M x 1 vector
    pub fn vector_matrix_multiply<V, M, O>(
        &self,
        vector: &V,
        matrix: &M,
        output: &mut O,
    ) -> Result<()>
    where
        V: SparseMatrix,
        M: SparseMatrix<Element = V::Element>,
        O: SparseMatrixMut<Element = V::Element>,
    {
        let (rows, cols) = matrix.dimensions();
        debug!(
            rows,
            cols,
            vector_nnz = vector.nnz(),
            matrix_nnz = matrix.nnz(),
            "vector_matrix_multiply"
        );

        kernel::vector_matrix_multiply(vector, matrix, output)
            .map_err(|e| rejected("vector_matrix_multiply", e))?;
        self.finish("vector_matrix_multiply", output, true)
    }

    /// Dot product of two N x 1 vectors
    pub fn dot_product<A, B>(&self, vector1: &A, vector2: &B) -> Result<A::Element>
    where
        A: SparseMatrix,
        B: SparseMatrix<Element = A::Element>,
    {
        let sum = kernel::dot_product(vector1, vector2)
            .map_err(|e| rejected("dot_product", e))?;
        debug!(
            rows = vector1.nrows(),
            nnz1 = vector1.nnz(),
            nnz2 = vector2.nnz(),
            result = ?sum,
            "dot_product"
        );
        Ok(sum)
    }

    /// Copy of the N x N `matrix` with the N x 1 `diag` added to its diagonal
    pub fn add_diagonal<M, D>(&self, matrix: &M, diag: &D) -> Result<M>
    where
        M: SparseMatrixMut + Clone,
        D: SparseMatrix<Element = M::Element>,
    {
        let (rows, cols) = matrix.dimensions();
        debug!(rows, cols, nnz = matrix.nnz(), diag_nnz = diag.nnz(), "add_diagonal");

        let output = kernel::add_diagonal(matrix, diag)
            .map_err(|e| rejected("add_diagonal", e))?;
        self.finish("add_diagonal", &output, false)?;
        Ok(output)
    }

    /// Negated entries of `matrix` written into `output`
    pub fn negate<M, O>(&self, matrix: &M, output: &mut O) -> Result<()>
    where
        M: SparseMatrix,
        O: SparseMatrixMut<Element = M::Element>,
    {
        let (rows, cols) = matrix.dimensions();
        debug!(rows, cols, nnz = matrix.nnz(), "negate");

        kernel::negate(matrix, output).map_err(|e| rejected("negate", e))?;
        self.finish("negate", output, false)
    }

    /// Post-processing shared by every matrix-producing operation
    fn finish<O: SparseMatrix>(
        &self,
        operation: &'static str,
        output: &O,
        pruned: bool,
    ) -> Result<()> {
        if self.config.trace_entries {
            diagnostics::inspect(output);
        }
        if pruned && self.config.verify_representation {
            diagnostics::check_representation(output).map_err(|e| rejected(operation, e))?;
        }
        debug!(operation, nnz = output.nnz(), "output ready");
        Ok(())
    }
}

fn rejected(operation: &'static str, err: KernelError) -> KernelError {
    warn!(operation, category = ?err.category(), "{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmath_core::{sorted_entries, HashSparseMatrix};

    fn cancelling_rows() -> HashSparseMatrix<f32> {
        HashSparseMatrix::from_triplets(3, 2, vec![(0, 0, 1.0), (0, 1, -1.0), (2, 1, 2.0)])
            .unwrap()
    }

    #[test]
    fn test_default_kernel_keeps_zero_row_sums() {
        let mut out = HashSparseMatrix::column_vector(3);
        Kernel::default().sum_rows(&cancelling_rows(), &mut out).unwrap();
        assert_eq!(out.get_element(0, 0), Some(0.0));
        assert_eq!(out.nnz(), 2);
    }

    #[test]
    fn test_row_sum_pruning() {
        let kernel = Kernel::new(KernelConfig::strict());
        let mut out = HashSparseMatrix::column_vector(3);
        kernel.sum_rows(&cancelling_rows(), &mut out).unwrap();
        assert_eq!(sorted_entries(&out), vec![(2, 0, 2.0)]);
    }

    #[test]
    fn test_verification_passes_for_products() {
        let kernel = Kernel::new(KernelConfig::strict().with_entry_tracing(true));
        let v = HashSparseMatrix::from_column(2, vec![(0, 1.0f32), (1, -1.0)]).unwrap();
        let a = HashSparseMatrix::from_triplets(2, 1, vec![(0, 0, 5.0), (1, 0, 5.0)])
            .unwrap();
        let mut out = HashSparseMatrix::column_vector(1);
        kernel.vector_matrix_multiply(&v, &a, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_facade_forwards_contract_violations() {
        let kernel = Kernel::default();
        let a = HashSparseMatrix::<f64>::new(2, 3);
        let d = HashSparseMatrix::column_vector(2);
        let err = kernel.add_diagonal(&a, &d).unwrap_err();
        assert_eq!(err, KernelError::NotSquare { rows: 2, cols: 3 });
        assert!(err.is_contract_violation());

        let v1 = HashSparseMatrix::<f64>::column_vector(2);
        let v2 = HashSparseMatrix::column_vector(3);
        assert!(kernel.dot_product(&v1, &v2).is_err());
    }

    #[test]
    fn test_negate_and_add_diagonal() {
        let kernel = Kernel::default();
        let w = HashSparseMatrix::from_triplets(2, 2, vec![(0, 1, 0.5f64), (1, 0, 0.5)])
            .unwrap();
        let mut neg = HashSparseMatrix::new(2, 2);
        kernel.negate(&w, &mut neg).unwrap();
        let d = HashSparseMatrix::from_column(2, vec![(0, 0.5), (1, 0.5)]).unwrap();
        let laplacian = kernel.add_diagonal(&neg, &d).unwrap();
        assert_eq!(
            sorted_entries(&laplacian),
            vec![(0, 0, 0.5), (0, 1, -0.5), (1, 0, -0.5), (1, 1, 0.5)]
        );
        assert_eq!(kernel.dot_product(&d, &d), Ok(0.5));
    }
}
