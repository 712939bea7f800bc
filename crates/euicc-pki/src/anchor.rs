//! # Trust Anchors
//!
//! [`TrustAnchorSet`] is the output of a trust store build: the resolved CI
//! root certificates in insertion order, plus the diagnostics a caller
//! needs to tell a full build from a degraded one.
//!
//! The set is built fresh for every download attempt and handed to the TLS
//! layer as `CertificateDer` values.

use euicc_core::IssuerKeyId;
use rustls_pki_types::CertificateDer;

use crate::registry::IssuerClass;

/// A decoded CI root certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchor {
    key_id: IssuerKeyId,
    name: &'static str,
    class: IssuerClass,
    subject: String,
    der: CertificateDer<'static>,
}

impl TrustAnchor {
    pub(crate) fn new(
        key_id: IssuerKeyId,
        name: &'static str,
        class: IssuerClass,
        subject: String,
        der: CertificateDer<'static>,
    ) -> Self {
        Self {
            key_id,
            name,
            class,
            subject,
            der,
        }
    }

    /// Subject Key Identifier the anchor is registered under.
    pub fn key_id(&self) -> &IssuerKeyId {
        &self.key_id
    }

    /// Registry display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Production or test CI.
    pub fn class(&self) -> IssuerClass {
        self.class
    }

    /// RFC 4514 rendering of the certificate subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// DER-encoded certificate.
    pub fn der(&self) -> &CertificateDer<'static> {
        &self.der
    }

    /// Consume the anchor, returning the DER certificate.
    pub fn into_der(self) -> CertificateDer<'static> {
        self.der
    }
}

/// An ordered set of trust anchors produced by one build.
///
/// Requested identifiers come first, in the order the caller gave them.
/// The default anchor is last when the build had to append it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustAnchorSet {
    anchors: Vec<TrustAnchor>,
    unresolved: Vec<String>,
    default_supplemented: bool,
}

impl TrustAnchorSet {
    pub(crate) fn push(&mut self, anchor: TrustAnchor) {
        self.anchors.push(anchor);
    }

    pub(crate) fn push_default(&mut self, anchor: TrustAnchor) {
        self.anchors.push(anchor);
        self.default_supplemented = true;
    }

    pub(crate) fn mark_unresolved(&mut self, key_id: &str) {
        self.unresolved.push(key_id.to_string());
    }

    pub(crate) fn is_unresolved(&self, key_id: &str) -> bool {
        self.unresolved.iter().any(|k| k == key_id)
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Whether the set holds no anchors. Only possible when the registry
    /// cannot supply the default anchor.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Whether an anchor with this key identifier is present.
    pub fn contains(&self, key_id: &str) -> bool {
        self.get(key_id).is_some()
    }

    /// The anchor registered under `key_id`, if present.
    pub fn get(&self, key_id: &str) -> Option<&TrustAnchor> {
        self.anchors.iter().find(|a| a.key_id.as_str() == key_id)
    }

    /// Anchors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrustAnchor> {
        self.anchors.iter()
    }

    /// Key identifiers in insertion order.
    pub fn key_ids(&self) -> impl Iterator<Item = &str> {
        self.anchors.iter().map(|a| a.key_id.as_str())
    }

    /// DER certificates in insertion order, for the TLS layer.
    pub fn certificates(&self) -> impl Iterator<Item = &CertificateDer<'static>> {
        self.anchors.iter().map(|a| &a.der)
    }

    /// Consume the set, returning the DER certificates in insertion order.
    pub fn into_certificates(self) -> Vec<CertificateDer<'static>> {
        self.anchors.into_iter().map(TrustAnchor::into_der).collect()
    }

    /// Requested identifiers that did not produce an anchor: unknown to the
    /// registry, or failed to decode.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Whether the default anchor was appended by the safety net rather
    /// than requested by the caller.
    pub fn default_supplemented(&self) -> bool {
        self.default_supplemented
    }

    /// Whether nothing the caller asked for resolved and the set holds only
    /// the default anchor.
    pub fn fell_back_to_default_only(&self) -> bool {
        self.default_supplemented && self.anchors.len() == 1
    }
}

impl<'a> IntoIterator for &'a TrustAnchorSet {
    type Item = &'a TrustAnchor;
    type IntoIter = std::slice::Iter<'a, TrustAnchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.iter()
    }
}

impl IntoIterator for TrustAnchorSet {
    type Item = TrustAnchor;
    type IntoIter = std::vec::IntoIter<TrustAnchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.into_iter()
    }
}
