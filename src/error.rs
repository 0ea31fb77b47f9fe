//! Error types for address buffer operations.

use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpRangeError {
    /// Two address buffers of different byte widths were compared.
    #[error("IP addresses {left:?} and {right:?} have different sizes")]
    SizeMismatch {
        /// Left-hand operand of the comparison.
        left: Vec<u8>,
        /// Right-hand operand of the comparison.
        right: Vec<u8>,
    },
}
