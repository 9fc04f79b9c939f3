//! Validation utilities for kernel preconditions
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod shape;

pub use shape::{
    validate_empty, validate_index, validate_output_dims, validate_output_rows,
    validate_rows_match, validate_square,
};
