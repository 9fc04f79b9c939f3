//! Core matrix abstraction traits
//!
//! The kernel never owns storage. It reads and writes matrices only
//! through these traits, so any storage engine that can enumerate its
//! entries and accumulate into a coordinate can be plugged in.

use super::element::SparseElement;
use crate::Result;

/// Read access to a sparse matrix
///
/// Only stored entries are considered non-zero. Any coordinate that is
/// not stored reads as zero.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: SparseElement;

    /// Iterator over stored entries
    type Entries<'a>: Iterator<Item = (usize, usize, Self::Element)>
    where
        Self: 'a;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Get a stored entry
    ///
    /// Returns `None` if the entry is not stored or the position is out of
    /// bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Iterate all stored entries as `(row, col, value)`
    ///
    /// Order is unspecified.
    fn entries(&self) -> Self::Entries<'_>;

    /// Lookup with a default of zero for absent entries
    fn value(&self, row: usize, col: usize) -> Self::Element {
        self.get_element(row, col)
            .unwrap_or(<Self::Element as SparseElement>::ZERO)
    }

    /// Number of rows
    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    /// Number of columns
    fn ncols(&self) -> usize {
        self.dimensions().1
    }

    /// True if nothing is stored
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }
}

/// Write access to a sparse matrix
pub trait SparseMatrixMut: SparseMatrix {
    /// Add `delta` to the entry at `(row, col)`, inserting it if absent
    ///
    /// Returns the resulting value. The entry is kept even if the result
    /// is zero; pruning is the caller's decision.
    fn accumulate(
        &mut self,
        row: usize,
        col: usize,
        delta: Self::Element,
    ) -> Result<Self::Element>;

    /// Overwrite the entry at `(row, col)`
    ///
    /// Inserting zero erases the entry instead.
    fn insert(&mut self, row: usize, col: usize, value: Self::Element) -> Result<()>;

    /// Remove the entry at `(row, col)`, returning the old value
    fn erase(&mut self, row: usize, col: usize) -> Option<Self::Element>;

    /// Remove every stored entry, keeping the dimensions
    fn clear(&mut self);
}
