#![no_std]

//! spmath core - sparse matrix traits and arithmetic kernel
//!
//! This crate provides the element and matrix traits, shape validation and
//! the kernel operations. It performs no I/O and does not log. With the
//! `alloc` feature it also ships a hash-map backed storage type.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
#[cfg(feature = "alloc")]
pub mod hash_matrix;
pub mod kernel;
pub mod traits;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use hash_matrix::{sorted_entries, HashSparseMatrix};
pub use kernel::*;
pub use traits::*;
