//! # Issuer Key Identifiers
//!
//! A Certificate Issuer (CI) in the GSMA eSIM trust chain is identified by
//! the Subject Key Identifier of its root certificate: a 20-byte SHA-1
//! value rendered as 40 lowercase hex characters.
//!
//! ## Validation
//!
//! `IssuerKeyId::new()` trims surrounding whitespace, folds to lowercase,
//! and then requires exactly 40 hex digits. Deserialization runs the same
//! validation, so a malformed identifier in a trust policy fails loudly at
//! load time instead of silently missing the registry later.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Length of a hex-encoded SHA-1 key identifier.
pub const ISSUER_KEY_ID_HEX_LEN: usize = 40;

/// Subject Key Identifier of a CI root certificate, as 40 lowercase hex
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssuerKeyId(String);

impl IssuerKeyId {
    /// Create an issuer key identifier from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIssuerKeyId`] unless the trimmed
    /// input is exactly 40 hex digits.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let hex = raw.trim().to_ascii_lowercase();
        if hex.len() != ISSUER_KEY_ID_HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidIssuerKeyId(raw.to_string()));
        }
        Ok(Self(hex))
    }

    /// Build an identifier from raw key identifier bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIssuerKeyId`] if `bytes` is not
    /// 20 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self::new(hex)
    }

    /// Access the identifier as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IssuerKeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IssuerKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IssuerKeyId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for IssuerKeyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IssuerKeyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::new(&hex).map_err(serde::de::Error::custom)
    }
}
