//! Error types for sparse kernel operations

/// Errors that can occur during sparse kernel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Operand row counts disagree
    RowMismatch { expected: usize, found: usize },
    /// Output shape does not match what the operation produces
    OutputShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Operation requires a square matrix
    NotSquare { rows: usize, cols: usize },
    /// Output must be empty on entry
    OutputNotEmpty { nnz: usize },
    /// Write outside the matrix dimensions
    IndexOutOfBounds { row: usize, col: usize },
    /// A stored entry holds an exact zero
    StoredZero { row: usize, col: usize },
}

/// Coarse classification of [`KernelError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller broke an operation precondition
    ContractViolation,
    /// A matrix no longer satisfies the no-stored-zero invariant
    RepresentationViolation,
    /// The storage rejected an access
    Storage,
}

impl KernelError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            KernelError::RowMismatch { .. }
            | KernelError::OutputShapeMismatch { .. }
            | KernelError::NotSquare { .. }
            | KernelError::OutputNotEmpty { .. } => ErrorCategory::ContractViolation,
            KernelError::StoredZero { .. } => ErrorCategory::RepresentationViolation,
            KernelError::IndexOutOfBounds { .. } => ErrorCategory::Storage,
        }
    }

    /// True for precondition failures detected at operation entry
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.category(), ErrorCategory::ContractViolation)
    }
}

impl core::fmt::Display for KernelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KernelError::RowMismatch { expected, found } => {
                write!(f, "Row count mismatch: expected {expected}, found {found}")
            }
            KernelError::OutputShapeMismatch { expected, found } => write!(
                f,
                "Output shape mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            KernelError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square ({rows}x{cols})")
            }
            KernelError::OutputNotEmpty { nnz } => {
                write!(f, "Output must be empty, has {nnz} stored entries")
            }
            KernelError::IndexOutOfBounds { row, col } => {
                write!(f, "Index ({row}, {col}) out of bounds")
            }
            KernelError::StoredZero { row, col } => {
                write!(f, "Stored zero at ({row}, {col})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

/// Result type for sparse kernel operations
pub type Result<T> = core::result::Result<T, KernelError>;
