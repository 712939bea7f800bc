//! # euicc-core — Foundational Types for eUICC Profile Management
//!
//! This crate is the leaf of the workspace. It defines the activation code
//! codec that every profile download starts from, together with the
//! validated identifier newtypes shared with `euicc-pki`.
//!
//! ## Key Design Principles
//!
//! 1. **Strict, tolerant-where-specified parsing.** `ActivationCode::parse()`
//!    accepts an optional `LPA:` scheme and trailing empty fields, but hard
//!    rejects unknown format versions. Future versions may change field
//!    semantics, so guessing is not an option.
//!
//! 2. **Newtype wrappers for identifiers.** `IssuerKeyId` and `SmdpAddress`
//!    validate at construction. No bare strings cross into trust-store
//!    configuration or network dispatch.
//!
//! 3. **Point-of-use address validation.** The activation code text format
//!    allows an empty address. The codec preserves that, and
//!    `ActivationCode::smdp_address()` is the gate that must be passed before
//!    any network action.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `euicc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No I/O and no logging. Every operation is a pure function.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod activation;
pub mod address;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use activation::{ActivationCode, LPA_SCHEME, LPA_VERSION};
pub use address::SmdpAddress;
pub use error::{ActivationCodeError, ValidationError};
pub use identity::IssuerKeyId;
