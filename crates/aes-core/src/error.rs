//! Error type for the cipher entry points.

use thiserror::Error;

/// Errors raised by the runtime-checked entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// `Nk` is not one of 4, 6 or 8.
    #[error("invalid key size: Nk = {0}, expected 4, 6 or 8")]
    InvalidKeySize(usize),

    /// A raw key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {0} bytes, expected 16, 24 or 32")]
    InvalidKeyLength(usize),

    /// A buffer or parameter does not match what the caller promised.
    #[error("contract violation for {context}: expected {expected}, got {actual}")]
    ContractViolation {
        /// What was being checked.
        context: &'static str,
        /// Required value.
        expected: usize,
        /// Value supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
