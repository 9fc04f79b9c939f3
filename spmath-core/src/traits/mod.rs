//! Abstract interfaces for sparse matrices
//!
//! This module defines the trait abstractions the kernel is written
//! against. Storage engines implement them; the kernel only consumes them.

pub mod element;
pub mod matrix;

pub use element::SparseElement;
pub use matrix::{SparseMatrix, SparseMatrixMut};
