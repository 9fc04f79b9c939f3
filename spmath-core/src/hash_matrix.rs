//! Hash-map backed sparse matrix storage
//!
//! A minimal storage engine for the kernel traits. Entries live in an
//! unordered `hashbrown` map keyed by `(row, col)`; iteration order is
//! whatever the map yields.

use alloc::vec::Vec;
use hashbrown::hash_map;
use hashbrown::HashMap;

use crate::traits::{SparseElement, SparseMatrix, SparseMatrixMut};
use crate::validation::validate_index;
use crate::Result;

/// Sparse matrix stored as a coordinate map
///
/// `Clone` produces an independent deep copy of the dimensions and the
/// entry map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "MatrixRepr<T>",
        into = "MatrixRepr<T>",
        bound(
            serialize = "T: SparseElement + serde::Serialize",
            deserialize = "T: SparseElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct HashSparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: SparseElement> HashSparseMatrix<T> {
    /// Create an empty `nrows` x `ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create an empty matrix with room for `nnz` entries
    pub fn with_capacity(nrows: usize, ncols: usize, nnz: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::with_capacity(nnz),
        }
    }

    /// Create an empty `n` x 1 column vector
    pub fn column_vector(n: usize) -> Self {
        Self::new(n, 1)
    }

    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Duplicate coordinates are summed. Entries that end up exactly zero
    /// are dropped.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let triplets = triplets.into_iter();
        let mut matrix = Self::with_capacity(nrows, ncols, triplets.size_hint().0);
        for (row, col, value) in triplets {
            matrix.accumulate(row, col, value)?;
        }
        matrix.entries.retain(|_, value| !value.is_zero());
        Ok(matrix)
    }

    /// Build an `n` x 1 column vector from `(index, value)` pairs
    pub fn from_column<I>(n: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        Self::from_triplets(n, 1, values.into_iter().map(|(i, v)| (i, 0, v)))
    }

    /// True if the coordinate has a stored entry
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }
}

/// Iterator over the stored entries of a [`HashSparseMatrix`]
pub struct Entries<'a, T> {
    inner: hash_map::Iter<'a, (usize, usize), T>,
}

impl<'a, T: Copy> Iterator for Entries<'a, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Entries<'a, T> {}

impl<T: SparseElement> SparseMatrix for HashSparseMatrix<T> {
    type Element = T;
    type Entries<'a>
        = Entries<'a, T>
    where
        Self: 'a;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn entries(&self) -> Self::Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }
}

impl<T: SparseElement> SparseMatrixMut for HashSparseMatrix<T> {
    fn accumulate(&mut self, row: usize, col: usize, delta: T) -> Result<T> {
        validate_index(row, col, (self.nrows, self.ncols))?;
        let slot = self.entries.entry((row, col)).or_insert(T::ZERO);
        *slot = *slot + delta;
        Ok(*slot)
    }

    fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(row, col, (self.nrows, self.ncols))?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    fn erase(&mut self, row: usize, col: usize) -> Option<T> {
        self.entries.remove(&(row, col))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Serialized form: dimensions plus a sorted triplet list
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr<T> {
    dims: (usize, usize),
    entries: Vec<(usize, usize, T)>,
}

#[cfg(feature = "serde")]
impl<T: SparseElement> From<HashSparseMatrix<T>> for MatrixRepr<T> {
    fn from(matrix: HashSparseMatrix<T>) -> Self {
        let mut entries: Vec<_> = matrix.entries().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        Self {
            dims: matrix.dimensions(),
            entries,
        }
    }
}

#[cfg(feature = "serde")]
impl<T: SparseElement> TryFrom<MatrixRepr<T>> for HashSparseMatrix<T> {
    type Error = crate::KernelError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self> {
        Self::from_triplets(repr.dims.0, repr.dims.1, repr.entries)
    }
}

/// Collect the stored entries sorted by `(row, col)`
///
/// Handy when a deterministic order matters, e.g. in assertions.
pub fn sorted_entries<M: SparseMatrix>(matrix: &M) -> Vec<(usize, usize, M::Element)> {
    let mut entries: Vec<_> = matrix.entries().collect();
    entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
    entries
}
