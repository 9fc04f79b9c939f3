//! Sparse arithmetic kernel
//!
//! Stateless operations over the matrix traits. Each function checks its
//! shape preconditions first and returns a contract-violation error
//! without mutating anything when they fail. None of them calls another.

pub mod product;
pub mod reduce;
pub mod update;

pub use product::{dot_product, vector_matrix_multiply};
pub use reduce::sum_rows;
pub use update::{add_diagonal, negate};
