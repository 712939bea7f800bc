//! # Embedded CI Registry
//!
//! A compiled-in snapshot of known GSMA eSIM Certificate Issuer roots,
//! keyed by the Subject Key Identifier of each root certificate.
//!
//! The table is a constant slice: nothing is initialized at runtime and
//! nothing is ever mutated, so lookups need no synchronization.
//!
//! ## Sources
//!
//! - SGP.28 v1.0, eSIM CI Registration Criteria.
//! - FS.27 v2.0, Security Guidelines for UICC Credentials.
//! - SGP.26 v1 and v3 for the test CIs.
//! - <https://euicc-manual.osmocom.org/docs/pki/ci/> for the certificates.

use serde::{Deserialize, Serialize};

/// Key identifier of GSM Association - RSP2 Root CI1, the anchor that
/// every trust store includes.
pub const DEFAULT_ISSUER: &str = "81370f5125d0b1d408d4c3b232e6d25e795bebfb";

/// GSMA live CIs, for production provisioning.
///
/// See <https://www.gsma.com/solutions-and-impact/technologies/esim/gsma-root-ci/>.
pub const LIVE_ISSUERS: &[&str] = &[
    // GSMA RSP2 Root CI1 (SGP.22 v2+v3, CA: DigiCert)
    DEFAULT_ISSUER,
    // OISTE GSMA CI G1 (SGP.22 v2+v3, CA: WISeKey)
    "4c27967ad20c14b391e9601e41e604ad57c0222f",
];

/// SGP.26 v3 test CIs, for test environments.
pub const TEST_ISSUERS: &[&str] = &[
    // Test CI (NIST P-256)
    "34eecf13156518d48d30bdf06853404d115f955d",
    // Test CI (brainpoolP256r1)
    "2209f61cd9ec5c9c854e787341ff83ecf9776a5b",
];

/// Whether a CI signs production or test profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuerClass {
    /// Issues certificates for live eUICCs and SM-DP+ servers.
    Production,
    /// Test-only CI. Never trust it on production devices.
    Test,
}

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Subject Key Identifier, 40 lowercase hex characters.
    pub key_id: &'static str,
    /// Issuer display name.
    pub name: &'static str,
    /// Production or test.
    pub class: IssuerClass,
    /// PEM-encoded root certificate.
    pub pem: &'static str,
}

/// A read-only view over a table of registry entries.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    entries: &'static [RegistryEntry],
}

impl Registry {
    /// Wrap a static table. Used for the embedded registry and in tests.
    pub const fn new(entries: &'static [RegistryEntry]) -> Self {
        Self { entries }
    }

    /// The compiled-in GSMA CI registry.
    pub const fn embedded() -> Self {
        Self::new(KNOWN_CI_CERTS)
    }

    /// Look up an entry by exact key identifier.
    pub fn get(&self, key_id: &str) -> Option<&'static RegistryEntry> {
        let entries = self.entries;
        entries.iter().find(|e| e.key_id == key_id)
    }

    /// Whether the registry holds `key_id`.
    pub fn contains(&self, key_id: &str) -> bool {
        self.get(key_id).is_some()
    }

    /// All entries in table order.
    pub fn entries(&self) -> &'static [RegistryEntry] {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::embedded()
    }
}

const KNOWN_CI_CERTS: &[RegistryEntry] = &[
    // Specs: SGP.21 and SGP.22 version 2 and version 3
    RegistryEntry {
        key_id: DEFAULT_ISSUER,
        name: "GSM Association - RSP2 Root CI1",
        class: IssuerClass::Production,
        pem: include_str!("../certs/gsma-rsp2-root-ci1.pem"),
    },
    // Specs: SGP.21 and SGP.22 version 2 and version 3
    RegistryEntry {
        key_id: "4c27967ad20c14b391e9601e41e604ad57c0222f",
        name: "OISTE GSMA CI G1",
        class: IssuerClass::Production,
        pem: include_str!("../certs/oiste-gsma-ci-g1.pem"),
    },
    RegistryEntry {
        key_id: "665a1433d67c1a2c5db8b52c967f10a057ba5cb2",
        name: "Symantec Corporation RSP Test Root CA",
        class: IssuerClass::Test,
        pem: include_str!("../certs/symantec-rsp-test-root-ca.pem"),
    },
    // Specs: SGP.26 v1
    RegistryEntry {
        key_id: "f54172bdf98a95d65cbeb88a38a1c11d800a85c3",
        name: "GSMA Test CI (NIST P-256)",
        class: IssuerClass::Test,
        pem: include_str!("../certs/gsma-test-ci-sgp26v1-nist.pem"),
    },
    RegistryEntry {
        key_id: "c0bc70ba36929d43b467ff57570530e57ab8fcd8",
        name: "GSMA Test CI (brainpoolP256r1)",
        class: IssuerClass::Test,
        pem: include_str!("../certs/gsma-test-ci-sgp26v1-brainpool.pem"),
    },
    // Specs: SGP.26 v3
    RegistryEntry {
        key_id: "34eecf13156518d48d30bdf06853404d115f955d",
        name: "Test CI (NIST P-256)",
        class: IssuerClass::Test,
        pem: include_str!("../certs/test-ci-sgp26v3-nist.pem"),
    },
    RegistryEntry {
        key_id: "2209f61cd9ec5c9c854e787341ff83ecf9776a5b",
        name: "Test CI (brainpoolP256r1)",
        class: IssuerClass::Test,
        pem: include_str!("../certs/test-ci-sgp26v3-brainpool.pem"),
    },
    RegistryEntry {
        key_id: "16704b7f351e3607f18c4b70005c3a003dfd414a",
        name: "Entrust eSIM Certification Authority",
        class: IssuerClass::Production,
        pem: include_str!("../certs/entrust-esim-ca.pem"),
    },
];
