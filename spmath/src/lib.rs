//! spmath - sparse matrix arithmetic kernel
//!
//! This library provides the handful of sparse operations a graph/image
//! analysis pipeline needs to build and apply graph Laplacians: row sums,
//! sparse vector x matrix products, sparse dot products, diagonal updates
//! and negation.
//!
//! ## Architecture
//!
//! - **spmath-core**: traits, shape validation and the pure kernel (no I/O,
//!   no logging, `no_std`)
//! - **spmath**: configuration, `tracing` instrumentation and diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use spmath::{HashSparseMatrix, Kernel, KernelConfig, SparseMatrix};
//!
//! fn example() -> spmath::Result<()> {
//!     let kernel = Kernel::new(KernelConfig::default());
//!
//!     let weights = HashSparseMatrix::from_triplets(
//!         2,
//!         2,
//!         vec![(0, 1, 0.5f32), (1, 0, 0.5)],
//!     )?;
//!     let mut degrees = HashSparseMatrix::column_vector(2);
//!     kernel.sum_rows(&weights, &mut degrees)?;
//!     assert_eq!(degrees.value(1, 0), 0.5);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions and the raw kernel
pub use spmath_core::{
    // Core traits
    SparseElement, SparseMatrix, SparseMatrixMut,
    // Storage
    HashSparseMatrix, sorted_entries,
    // Kernel operations
    add_diagonal, dot_product, negate, sum_rows, vector_matrix_multiply,
    // Error handling
    ErrorCategory, KernelError, Result,
};

pub mod config;
pub mod diagnostics;
pub mod kernel;

pub use config::KernelConfig;
pub use diagnostics::MatrixSummary;
pub use kernel::Kernel;
