//! # euicc-pki — Certificate Issuer Trust Store
//!
//! Builds the set of GSMA Certificate Issuer (CI) roots that the network
//! layer uses to authenticate an SM-DP+ during profile download:
//!
//! - **Registry**: a compiled-in snapshot of known live and test CI root
//!   certificates, keyed by Subject Key Identifier.
//! - **Builder**: resolves requested key identifiers into a
//!   [`TrustAnchorSet`], skipping unknown or undecodable entries and always
//!   including the GSMA RSP2 Root CI1 default anchor.
//! - **Policy**: YAML/JSON operator configuration selecting which CIs to
//!   request.
//! - **Download**: validates an activation code's address and pairs it with
//!   a trust anchor set.
//!
//! ## Crate Policy
//!
//! - Depends only on `euicc-core` internally.
//! - No network or filesystem access. Certificates are decoded in memory.
//! - Building a trust store never fails as a whole. Degradation is reported
//!   through the returned set and `tracing` events.
//! - Chain validation, signature and expiry checks belong to the TLS layer.

pub mod anchor;
pub mod builder;
pub mod decode;
pub mod download;
pub mod error;
pub mod policy;
pub mod registry;

pub use anchor::{TrustAnchor, TrustAnchorSet};
pub use builder::{build_trust_store, TrustStoreBuilder};
pub use decode::decode_entry;
pub use download::DownloadTarget;
pub use error::{CertificateDecodeError, PolicyError};
pub use policy::{IssuerSelection, TrustPolicy};
pub use registry::{
    IssuerClass, Registry, RegistryEntry, DEFAULT_ISSUER, LIVE_ISSUERS, TEST_ISSUERS,
};
