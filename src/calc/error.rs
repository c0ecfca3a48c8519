//! # Calculator Errors
//!
//! Errors raised by the natural number value type when an operation's
//! precondition does not hold. The view normally disables these operations
//! before they can be requested, so reaching one of these means the caller
//! bypassed the legality flags.

use thiserror::Error;

/// Errors from natural number operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The operation is not defined for the current operands.
    #[error("invalid operation: {operation}: {reason}")]
    InvalidOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Why the operands were rejected.
        reason: String,
    },

    /// A value does not fit in the bounded integer range.
    #[error("value {value} exceeds the bounded integer range")]
    Overflow {
        /// Decimal rendering of the offending value.
        value: String,
    },

    /// A digit outside `0..=9` was appended.
    #[error("invalid digit: {digit}")]
    InvalidDigit {
        /// The rejected digit.
        digit: u8,
    },

    /// Text is not a decimal natural number.
    #[error("not a natural number: '{input}'")]
    Parse {
        /// The text that failed to parse.
        input: String,
    },
}

impl CalcError {
    /// Shorthand for [`CalcError::InvalidOperation`].
    pub fn invalid_operation(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation,
            reason: reason.into(),
        }
    }
}
