//! # Error Types
//!
//! Errors raised by the activation code codec and the identifier newtypes.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Activation code format errors are surfaced synchronously and are never
//!   retried. A syntactically invalid code cannot succeed without user
//!   correction.
//! - Validation errors carry the offending input so the caller can show it
//!   back to the user.

use thiserror::Error;

/// The activation code does not have the minimal required shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivationCodeError {
    /// Fewer than two `$`-separated fields (version and address).
    #[error("invalid activation code format: expected at least 2 fields, found {found}")]
    TooFewFields {
        /// Number of fields present after splitting.
        found: usize,
    },

    /// The leading version field is not `"1"`.
    #[error("invalid activation code format: unsupported version {0:?}")]
    UnsupportedVersion(String),
}

/// A value failed validation at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The SM-DP+ address is empty after trimming.
    #[error("SM-DP+ address is empty")]
    EmptyAddress,

    /// The SM-DP+ address is not a valid host name or IPv4 literal.
    #[error("invalid SM-DP+ address: {0:?}")]
    InvalidAddress(String),

    /// The issuer key identifier is not 40 hex digits.
    #[error("invalid issuer key identifier: {0:?} (expected 40 hex digits)")]
    InvalidIssuerKeyId(String),
}
