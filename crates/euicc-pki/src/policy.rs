//! # Trust Policy
//!
//! Operator-facing configuration that decides which CIs a device trusts for
//! profile download. Loaded from YAML or JSON:
//!
//! ```yaml
//! issuers: live            # live | test | all | default_only
//! additional_issuers:
//!   - 16704b7f351e3607f18c4b70005c3a003dfd414a
//! ```
//!
//! Unknown fields and malformed key identifiers are rejected at load time.
//! Well-formed identifiers that the registry does not know are accepted
//! here and skipped by the builder.

use euicc_core::IssuerKeyId;
use serde::{Deserialize, Serialize};

use crate::anchor::TrustAnchorSet;
use crate::builder::TrustStoreBuilder;
use crate::error::PolicyError;
use crate::registry::{LIVE_ISSUERS, TEST_ISSUERS};

/// Named CI group a policy starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuerSelection {
    /// GSMA live CIs.
    #[default]
    Live,
    /// SGP.26 test CIs.
    Test,
    /// Live and test CIs.
    All,
    /// Nothing beyond the default anchor.
    DefaultOnly,
}

impl IssuerSelection {
    /// Key identifiers of the group, in registry group order.
    pub fn key_ids(self) -> Vec<&'static str> {
        match self {
            Self::Live => LIVE_ISSUERS.to_vec(),
            Self::Test => TEST_ISSUERS.to_vec(),
            Self::All => LIVE_ISSUERS.iter().chain(TEST_ISSUERS).copied().collect(),
            Self::DefaultOnly => Vec::new(),
        }
    }
}

/// Which CIs to trust for profile download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustPolicy {
    /// Named group to start from.
    #[serde(default)]
    pub issuers: IssuerSelection,
    /// Extra CIs trusted on top of the group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_issuers: Vec<IssuerKeyId>,
}

impl TrustPolicy {
    /// Policy trusting one named group and nothing else.
    pub fn new(issuers: IssuerSelection) -> Self {
        Self {
            issuers,
            additional_issuers: Vec::new(),
        }
    }

    /// Add a CI on top of the named group.
    pub fn with_additional_issuer(mut self, key_id: IssuerKeyId) -> Self {
        self.additional_issuers.push(key_id);
        self
    }

    /// Load a policy from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Yaml`] on syntax errors, unknown fields, or
    /// malformed key identifiers.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PolicyError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a policy from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Json`] on syntax errors, unknown fields, or
    /// malformed key identifiers.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Identifiers to request: the named group, then the additional
    /// issuers, first occurrence wins.
    pub fn requested_issuers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let group = self.issuers.key_ids().into_iter().map(str::to_string);
        let extra = self.additional_issuers.iter().map(|id| id.as_str().to_string());
        for key_id in group.chain(extra) {
            if !out.contains(&key_id) {
                out.push(key_id);
            }
        }
        out
    }

    /// Build a trust anchor set over the embedded registry.
    pub fn build_trust_store(&self) -> TrustAnchorSet {
        self.build_with(&TrustStoreBuilder::new())
    }

    /// Build a trust anchor set with a specific builder.
    pub fn build_with(&self, builder: &TrustStoreBuilder) -> TrustAnchorSet {
        builder.build(self.requested_issuers())
    }
}
