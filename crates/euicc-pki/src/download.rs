//! # Download Target Preparation
//!
//! Joins the two halves of the core: a parsed activation code and the
//! operator's trust policy become everything the network layer needs to
//! start a profile download. This is where an unusable SM-DP+ address is
//! stopped, before any connection is attempted.

use euicc_core::{ActivationCode, SmdpAddress, ValidationError};
use tracing::debug;

use crate::anchor::TrustAnchorSet;
use crate::builder::TrustStoreBuilder;
use crate::policy::TrustPolicy;

/// A validated download request, ready for the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    address: SmdpAddress,
    matching_id: Option<String>,
    confirmation_code_required: bool,
    trust_anchors: TrustAnchorSet,
}

impl DownloadTarget {
    /// Validate `code` and build trust anchors from `policy` over the
    /// embedded registry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddress`] or
    /// [`ValidationError::InvalidAddress`] when the code's address cannot be
    /// dialed.
    pub fn prepare(code: &ActivationCode, policy: &TrustPolicy) -> Result<Self, ValidationError> {
        Self::prepare_with(code, policy, &TrustStoreBuilder::new())
    }

    /// Like [`DownloadTarget::prepare()`] with a specific builder.
    ///
    /// # Errors
    ///
    /// Same as [`DownloadTarget::prepare()`].
    pub fn prepare_with(
        code: &ActivationCode,
        policy: &TrustPolicy,
        builder: &TrustStoreBuilder,
    ) -> Result<Self, ValidationError> {
        let address = code.smdp_address()?;
        let trust_anchors = policy.build_with(builder);
        debug!(
            address = %address,
            anchors = trust_anchors.len(),
            confirmation_code_required = code.confirmation_code_required(),
            "download target prepared"
        );
        Ok(Self {
            address,
            matching_id: code.matching_id().map(str::to_string),
            confirmation_code_required: code.confirmation_code_required(),
            trust_anchors,
        })
    }

    /// SM-DP+ host to connect to.
    pub fn address(&self) -> &SmdpAddress {
        &self.address
    }

    /// Matching identifier to present to the SM-DP+, if any.
    pub fn matching_id(&self) -> Option<&str> {
        self.matching_id.as_deref()
    }

    /// Whether the user must be prompted for a confirmation code.
    pub fn confirmation_code_required(&self) -> bool {
        self.confirmation_code_required
    }

    /// Trust anchors for the TLS and SGP.22 peer checks.
    pub fn trust_anchors(&self) -> &TrustAnchorSet {
        &self.trust_anchors
    }

    /// Consume the target, returning the trust anchors.
    pub fn into_trust_anchors(self) -> TrustAnchorSet {
        self.trust_anchors
    }
}
