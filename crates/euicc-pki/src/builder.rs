//! # Trust Store Builder
//!
//! Resolves requested CI key identifiers against the registry and
//! assembles a [`TrustAnchorSet`] for one download attempt.
//!
//! ## Invariants
//!
//! - A build never fails. Unknown identifiers and entries that fail to
//!   decode are skipped and reported through
//!   [`TrustAnchorSet::unresolved()`].
//! - The default anchor (GSMA RSP2 Root CI1) is always present when the
//!   registry can supply it. It is appended after the requested
//!   identifiers, so explicit requests are supplemented, never replaced.
//!   Many SM-DP+ servers that use another CI for SGP.22 still serve their
//!   TLS chain under the default anchor.
//! - Same registry and same requested sequence produce content-equal sets.

use tracing::{debug, error, warn};

use crate::anchor::{TrustAnchor, TrustAnchorSet};
use crate::decode::decode_entry;
use crate::registry::{Registry, DEFAULT_ISSUER};

/// Builds trust anchor sets from a registry.
#[derive(Debug, Clone, Copy)]
pub struct TrustStoreBuilder {
    registry: Registry,
    default_issuer: &'static str,
}

impl TrustStoreBuilder {
    /// Builder over the embedded registry with RSP2 Root CI1 as default.
    pub const fn new() -> Self {
        Self::with_registry(Registry::embedded(), DEFAULT_ISSUER)
    }

    /// Builder over an alternate registry and default anchor.
    pub const fn with_registry(registry: Registry, default_issuer: &'static str) -> Self {
        Self {
            registry,
            default_issuer,
        }
    }

    /// The registry this builder resolves against.
    pub fn registry(&self) -> Registry {
        self.registry
    }

    /// Key identifier of the anchor every set includes.
    pub fn default_issuer(&self) -> &'static str {
        self.default_issuer
    }

    /// Build a trust anchor set for the requested key identifiers.
    ///
    /// Identifiers are matched exactly. Duplicates are collapsed to their
    /// first occurrence.
    pub fn build<I, S>(&self, requested: I) -> TrustAnchorSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TrustAnchorSet::default();
        let mut requested_count = 0usize;

        for key_id in requested {
            let key_id = key_id.as_ref();
            requested_count += 1;
            if set.contains(key_id) || set.is_unresolved(key_id) {
                continue;
            }
            match self.resolve(key_id) {
                Some(anchor) => set.push(anchor),
                None => set.mark_unresolved(key_id),
            }
        }

        if !set.contains(self.default_issuer) && !set.is_unresolved(self.default_issuer) {
            if let Some(anchor) = self.resolve(self.default_issuer) {
                debug!(key_id = self.default_issuer, "appending default trust anchor");
                set.push_default(anchor);
            }
        }

        if requested_count > 0 && set.fell_back_to_default_only() {
            warn!(
                requested = requested_count,
                unresolved = ?set.unresolved(),
                "no requested issuer resolved; trusting the default anchor only"
            );
        }
        debug!(
            anchors = set.len(),
            unresolved = set.unresolved().len(),
            default_supplemented = set.default_supplemented(),
            "trust store built"
        );

        set
    }

    fn resolve(&self, key_id: &str) -> Option<TrustAnchor> {
        let Some(entry) = self.registry.get(key_id) else {
            debug!(key_id, "issuer key identifier not in registry, skipping");
            return None;
        };
        match decode_entry(entry) {
            Ok(anchor) => Some(anchor),
            Err(e) => {
                error!(key_id, error = %e, "embedded CI certificate failed to decode, excluding it");
                None
            }
        }
    }
}

impl Default for TrustStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a trust anchor set over the embedded registry.
///
/// Shorthand for `TrustStoreBuilder::new().build(requested)`.
pub fn build_trust_store<I, S>(requested: I) -> TrustAnchorSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TrustStoreBuilder::new().build(requested)
}
