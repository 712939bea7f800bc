//! # SGP.22 Activation Code Codec
//!
//! Parses and serializes the activation code text that starts every
//! profile download, usually scanned from a QR code or typed by the user:
//!
//! ```text
//! ["LPA:"] "1" "$" address ["$" matchingId] ["$" oid] ["$" confirmationFlag]
//! ```
//!
//! ## Parsing rules
//!
//! - The `LPA:` scheme is optional and case-sensitive.
//! - The version field must be exactly `1`. Unknown versions are rejected
//!   because a later version may assign different meanings to the fields.
//! - Every field after the version is trimmed. Empty optional fields are
//!   absent. The address is never absent, even when empty: the codec keeps
//!   it, and [`ActivationCode::smdp_address()`] rejects it at point of use.
//! - The confirmation flag is set only by a literal `1`.
//! - Fields after the confirmation flag are ignored.
//!
//! ## Canonical form
//!
//! [`ActivationCode::serialize()`] never emits the scheme and drops trailing
//! empty optional fields, so `serialize(parse(s))` is the canonical form of
//! any accepted `s`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::address::SmdpAddress;
use crate::error::{ActivationCodeError, ValidationError};

/// Scheme prefix of a shareable activation code.
pub const LPA_SCHEME: &str = "LPA:";

/// The only supported activation code format version.
pub const LPA_VERSION: &str = "1";

const DELIMITER: char = '$';
const CONFIRMATION_REQUIRED: &str = "1";

/// A parsed SGP.22 activation code.
///
/// Immutable once built. Optional fields are stored trimmed, and blank
/// values are normalized to `None` by every constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationCode {
    address: String,
    matching_id: Option<String>,
    oid: Option<String>,
    confirmation_code_required: bool,
}

/// Wire shape of [`ActivationCode`] before normalization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivationCode {
    address: String,
    #[serde(default)]
    matching_id: Option<String>,
    #[serde(default)]
    oid: Option<String>,
    #[serde(default)]
    confirmation_code_required: bool,
}

impl ActivationCode {
    /// Create an activation code for `address` with no optional fields.
    pub fn new(address: impl AsRef<str>) -> Self {
        Self {
            address: address.as_ref().trim().to_string(),
            matching_id: None,
            oid: None,
            confirmation_code_required: false,
        }
    }

    /// Set the matching identifier. Blank values clear it.
    pub fn with_matching_id(mut self, matching_id: impl AsRef<str>) -> Self {
        self.matching_id = non_blank(matching_id.as_ref());
        self
    }

    /// Set the SM-DP+ object identifier. Blank values clear it.
    pub fn with_oid(mut self, oid: impl AsRef<str>) -> Self {
        self.oid = non_blank(oid.as_ref());
        self
    }

    /// Set whether a confirmation code must be entered before download.
    pub fn with_confirmation_code_required(mut self, required: bool) -> Self {
        self.confirmation_code_required = required;
        self
    }

    /// Parse an activation code string.
    ///
    /// # Errors
    ///
    /// Returns [`ActivationCodeError::TooFewFields`] when the input has no
    /// address field and [`ActivationCodeError::UnsupportedVersion`] when the
    /// version field is anything other than `1`.
    pub fn parse(input: &str) -> Result<Self, ActivationCodeError> {
        let body = input.strip_prefix(LPA_SCHEME).unwrap_or(input);
        let fields: Vec<&str> = body.split(DELIMITER).collect();

        if fields.len() < 2 {
            return Err(ActivationCodeError::TooFewFields {
                found: fields.len(),
            });
        }
        if fields[0] != LPA_VERSION {
            return Err(ActivationCodeError::UnsupportedVersion(fields[0].to_string()));
        }

        let field = |index: usize| fields.get(index).map(|f| f.trim());

        Ok(Self {
            address: fields[1].trim().to_string(),
            matching_id: field(2).and_then(non_blank),
            oid: field(3).and_then(non_blank),
            confirmation_code_required: field(4) == Some(CONFIRMATION_REQUIRED),
        })
    }

    /// Serialize to canonical form, without the `LPA:` scheme.
    ///
    /// The version and address are always present. Trailing empty optional
    /// fields are dropped, so a bare code becomes `1$<address>`.
    pub fn serialize(&self) -> String {
        let flag = if self.confirmation_code_required {
            CONFIRMATION_REQUIRED
        } else {
            ""
        };
        let optional = [
            self.matching_id.as_deref().unwrap_or(""),
            self.oid.as_deref().unwrap_or(""),
            flag,
        ];
        let used = optional
            .iter()
            .rposition(|f| !f.is_empty())
            .map_or(0, |last| last + 1);

        let mut out = String::from(LPA_VERSION);
        out.push(DELIMITER);
        out.push_str(&self.address);
        for field in &optional[..used] {
            out.push(DELIMITER);
            out.push_str(field);
        }
        out
    }

    /// Serialize with the `LPA:` scheme, the form used for sharing a code
    /// or rendering it as a QR code.
    pub fn to_lpa_string(&self) -> String {
        format!("{LPA_SCHEME}{}", self.serialize())
    }

    /// Canonical form of an activation code string: `serialize(parse(input))`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ActivationCodeError`] from [`ActivationCode::parse()`].
    pub fn canonicalize(input: &str) -> Result<String, ActivationCodeError> {
        Ok(Self::parse(input)?.serialize())
    }

    /// Validate the address for use as a download target.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddress`] or
    /// [`ValidationError::InvalidAddress`] when the address cannot be
    /// dialed.
    pub fn smdp_address(&self) -> Result<SmdpAddress, ValidationError> {
        SmdpAddress::new(&self.address)
    }

    /// The SM-DP+ address exactly as carried by the code. May be empty.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The matching identifier, if present.
    pub fn matching_id(&self) -> Option<&str> {
        self.matching_id.as_deref()
    }

    /// The SM-DP+ object identifier, if present.
    pub fn oid(&self) -> Option<&str> {
        self.oid.as_deref()
    }

    /// Whether the user must supply a confirmation code.
    pub fn confirmation_code_required(&self) -> bool {
        self.confirmation_code_required
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl std::fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<'de> Deserialize<'de> for ActivationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawActivationCode::deserialize(deserializer)?;
        let mut code = Self::new(raw.address)
            .with_confirmation_code_required(raw.confirmation_code_required);
        if let Some(matching_id) = raw.matching_id {
            code = code.with_matching_id(matching_id);
        }
        if let Some(oid) = raw.oid {
            code = code.with_oid(oid);
        }
        Ok(code)
    }
}

impl std::str::FromStr for ActivationCode {
    type Err = ActivationCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
