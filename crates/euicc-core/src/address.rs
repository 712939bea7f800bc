//! # SM-DP+ Address
//!
//! The activation code format allows any non-`$` text in the address field,
//! including nothing at all. Routing a download to such a host is unsafe,
//! so the address is validated into an [`SmdpAddress`] at the point of use,
//! before any network action.
//!
//! Host syntax is delegated to [`url::Host::parse`], which applies IDNA
//! mapping and recognizes IP literals. On top of that:
//!
//! - IPv4 literals must be in dotted-quad form (`192.0.2.10`). Shorthand
//!   such as `1.2.3` or `0x7f.1` is rejected.
//! - IPv6 literals must be bracketed (`[2001:db8::1]`).
//! - A domain has at least two labels. Each label is 1-63 ASCII
//!   alphanumerics or hyphens after IDNA mapping and does not start or end
//!   with a hyphen. The whole name is at most 253 characters and the final
//!   label is not purely numeric. One trailing root dot is accepted and
//!   dropped.
//! - Ports, paths, and schemes are rejected: an SM-DP+ is addressed by host.
//!
//! The stored form is the serialized host: lowercase, with internationalized
//! names in their `xn--` ASCII form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Host;

use crate::error::ValidationError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated SM-DP+ or SM-DS host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SmdpAddress(String);

impl SmdpAddress {
    /// Validate a host name or IP literal.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddress`] for blank input and
    /// [`ValidationError::InvalidAddress`] for anything that is not a
    /// plausible host.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        let candidate = trimmed.strip_suffix('.').unwrap_or(trimmed);
        let invalid = || ValidationError::InvalidAddress(raw.to_string());

        let host = Host::parse(candidate).map_err(|_| invalid())?;
        let accepted = match &host {
            Host::Domain(name) => is_dns_name(name),
            Host::Ipv4(addr) => addr.to_string() == candidate,
            Host::Ipv6(_) => true,
        };
        if accepted {
            Ok(Self(host.to_string()))
        } else {
            Err(invalid())
        }
    }

    /// Access the host as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_dns_name(name: &str) -> bool {
    if name.len() > MAX_NAME_LEN {
        return false;
    }
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|l| is_label(l)) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl AsRef<str> for SmdpAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SmdpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SmdpAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for SmdpAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SmdpAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let host = String::deserialize(deserializer)?;
        Self::new(&host).map_err(serde::de::Error::custom)
    }
}
