//! # Trust Store Error Types
//!
//! Structured errors for certificate decoding and trust policy loading.
//! Uses `thiserror` for ergonomic error definitions with diagnostic context.

use thiserror::Error;

/// An embedded registry certificate could not be materialized.
///
/// This signals a data defect in the compiled-in registry, never a user
/// condition. The trust store builder excludes the affected entry and
/// carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateDecodeError {
    /// The PEM envelope is malformed.
    #[error("invalid PEM for issuer {key_id}: {reason}")]
    Pem {
        /// Registry key of the entry.
        key_id: String,
        /// Parser message.
        reason: String,
    },

    /// The PEM block is not a certificate.
    #[error("issuer {key_id}: expected PEM tag CERTIFICATE, found {tag}")]
    UnexpectedTag {
        /// Registry key of the entry.
        key_id: String,
        /// Tag found in the PEM header.
        tag: String,
    },

    /// The DER payload is not a valid X.509 certificate.
    #[error("invalid X.509 certificate for issuer {key_id}: {reason}")]
    X509 {
        /// Registry key of the entry.
        key_id: String,
        /// Parser message.
        reason: String,
    },

    /// The certificate has no Subject Key Identifier extension.
    #[error("issuer {key_id}: certificate has no subject key identifier")]
    MissingSubjectKeyIdentifier {
        /// Registry key of the entry.
        key_id: String,
    },

    /// The certificate's Subject Key Identifier differs from its registry key.
    #[error("issuer key mismatch: registry key {expected}, certificate key {found}")]
    KeyIdMismatch {
        /// Registry key of the entry.
        expected: String,
        /// Subject Key Identifier found in the certificate.
        found: String,
    },
}

/// A trust policy document could not be loaded.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// YAML parsing or validation failed.
    #[error("invalid trust policy YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or validation failed.
    #[error("invalid trust policy JSON: {0}")]
    Json(#[from] serde_json::Error),
}
