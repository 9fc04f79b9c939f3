//! Shape precondition checks
//!
//! Pure functions on dimensions. Every kernel operation runs the checks it
//! needs before touching any output, so a failed check leaves all operands
//! unchanged.

use crate::KernelError;

/// Validate that two operands have the same number of rows
pub const fn validate_rows_match(expected: usize, found: usize) -> Result<(), KernelError> {
    if expected != found {
        return Err(KernelError::RowMismatch { expected, found });
    }
    Ok(())
}

/// Validate that a matrix is square
pub const fn validate_square(dims: (usize, usize)) -> Result<(), KernelError> {
    if dims.0 != dims.1 {
        return Err(KernelError::NotSquare {
            rows: dims.0,
            cols: dims.1,
        });
    }
    Ok(())
}

/// Validate that an output has exactly `rows` rows
///
/// Only the row count is compared; `expected.1` is reported as-is.
pub const fn validate_output_rows(
    expected: (usize, usize),
    found: (usize, usize),
) -> Result<(), KernelError> {
    if expected.0 != found.0 {
        return Err(KernelError::OutputShapeMismatch { expected, found });
    }
    Ok(())
}

/// Validate that an output has exactly the given dimensions
pub const fn validate_output_dims(
    expected: (usize, usize),
    found: (usize, usize),
) -> Result<(), KernelError> {
    if expected.0 != found.0 || expected.1 != found.1 {
        return Err(KernelError::OutputShapeMismatch { expected, found });
    }
    Ok(())
}

/// Validate that an output holds no stored entries
pub const fn validate_empty(nnz: usize) -> Result<(), KernelError> {
    if nnz != 0 {
        return Err(KernelError::OutputNotEmpty { nnz });
    }
    Ok(())
}

/// Validate that a coordinate lies inside the dimensions
pub const fn validate_index(
    row: usize,
    col: usize,
    dims: (usize, usize),
) -> Result<(), KernelError> {
    if row >= dims.0 || col >= dims.1 {
        return Err(KernelError::IndexOutOfBounds { row, col });
    }
    Ok(())
}
