//! Kernel configuration
//!
//! The kernel functions themselves take no options. [`KernelConfig`]
//! controls what the [`crate::Kernel`] facade does around them.

/// Configuration for [`crate::Kernel`]
///
/// Everything is off by default, which runs the bare kernel operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    /// Erase row sums that cancel to exactly zero
    pub prune_row_sums: bool,
    /// Check pruning operations' outputs for stored zeros
    pub verify_representation: bool,
    /// Walk every produced output with [`crate::diagnostics::inspect`]
    pub trace_entries: bool,
}

impl KernelConfig {
    /// Strict config: prune row sums and verify every pruned output
    pub fn strict() -> Self {
        Self {
            prune_row_sums: true,
            verify_representation: true,
            trace_entries: false,
        }
    }

    /// Set row-sum pruning
    pub fn with_row_sum_pruning(mut self, enabled: bool) -> Self {
        self.prune_row_sums = enabled;
        self
    }

    /// Set representation verification
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_representation = enabled;
        self
    }

    /// Set per-entry tracing of outputs
    pub fn with_entry_tracing(mut self, enabled: bool) -> Self {
        self.trace_entries = enabled;
        self
    }
}
