//! # Certificate Materialization
//!
//! Turns a registry row into a [`TrustAnchor`]: PEM envelope → DER →
//! parsed X.509 certificate, then checks that the certificate's Subject Key
//! Identifier is the key it is registered under.
//!
//! A failure here means the compiled-in data is wrong. Callers exclude the
//! entry rather than abort.

use euicc_core::IssuerKeyId;
use rustls_pki_types::CertificateDer;
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::ParsedExtension;

use crate::anchor::TrustAnchor;
use crate::error::CertificateDecodeError;
use crate::registry::RegistryEntry;

const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Decode and verify one registry entry.
///
/// # Errors
///
/// Returns a [`CertificateDecodeError`] when the PEM is malformed, is not a
/// certificate, does not parse as X.509, or carries a Subject Key
/// Identifier other than `entry.key_id`.
pub fn decode_entry(entry: &RegistryEntry) -> Result<TrustAnchor, CertificateDecodeError> {
    let key_id = entry.key_id;

    let block = pem::parse(entry.pem).map_err(|e| CertificateDecodeError::Pem {
        key_id: key_id.to_string(),
        reason: e.to_string(),
    })?;
    if block.tag() != CERTIFICATE_TAG {
        return Err(CertificateDecodeError::UnexpectedTag {
            key_id: key_id.to_string(),
            tag: block.tag().to_string(),
        });
    }
    let der = block.into_contents();

    let (subject, found) = {
        let (_, cert) = x509_parser::parse_x509_certificate(&der).map_err(|e| {
            CertificateDecodeError::X509 {
                key_id: key_id.to_string(),
                reason: e.to_string(),
            }
        })?;
        let found = issuer_key_id(key_id, subject_key_identifier(&cert))?;
        (cert.subject().to_string(), found)
    };
    if found.as_str() != key_id {
        return Err(CertificateDecodeError::KeyIdMismatch {
            expected: key_id.to_string(),
            found: found.to_string(),
        });
    }

    Ok(TrustAnchor::new(
        found,
        entry.name,
        entry.class,
        subject,
        CertificateDer::from(der),
    ))
}

/// Raw Subject Key Identifier extension value, if present.
fn subject_key_identifier<'a>(cert: &'a X509Certificate<'_>) -> Option<&'a [u8]> {
    cert.extensions()
        .iter()
        .find_map(|ext| match ext.parsed_extension() {
            ParsedExtension::SubjectKeyIdentifier(kid) => Some(kid.0),
            _ => None,
        })
}

fn issuer_key_id(key_id: &str, ski: Option<&[u8]>) -> Result<IssuerKeyId, CertificateDecodeError> {
    let bytes = ski.ok_or_else(|| CertificateDecodeError::MissingSubjectKeyIdentifier {
        key_id: key_id.to_string(),
    })?;
    IssuerKeyId::from_bytes(bytes).map_err(|e| CertificateDecodeError::X509 {
        key_id: key_id.to_string(),
        reason: format!("subject key identifier: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{IssuerClass, Registry, DEFAULT_ISSUER};

    const CI1_PEM: &str = include_str!("../certs/gsma-rsp2-root-ci1.pem");

    fn entry(key_id: &'static str, pem: &'static str) -> RegistryEntry {
        RegistryEntry {
            key_id,
            name: "fixture",
            class: IssuerClass::Test,
            pem,
        }
    }

    #[test]
    fn every_embedded_entry_decodes() {
        for entry in Registry::embedded().entries() {
            let anchor = decode_entry(entry)
                .unwrap_or_else(|e| panic!("{} failed to decode: {e}", entry.name));
            assert_eq!(anchor.key_id().as_str(), entry.key_id);
            assert_eq!(anchor.name(), entry.name);
            assert_eq!(anchor.class(), entry.class);
            assert!(!anchor.der().as_ref().is_empty());
        }
    }

    #[test]
    fn default_anchor_subject() {
        let entry = Registry::embedded().get(DEFAULT_ISSUER).unwrap();
        let anchor = decode_entry(entry).unwrap();
        assert!(
            anchor.subject().contains("GSM Association - RSP2 Root CI1"),
            "unexpected subject {}",
            anchor.subject()
        );
    }

    #[test]
    fn brainpool_test_ci_decodes() {
        let entry = Registry::embedded()
            .get("2209f61cd9ec5c9c854e787341ff83ecf9776a5b")
            .unwrap();
        let anchor = decode_entry(entry).unwrap();
        assert!(anchor.subject().contains("Test CI"));
    }

    #[test]
    fn rejects_non_pem() {
        let err = decode_entry(&entry(DEFAULT_ISSUER, "not a certificate")).unwrap_err();
        assert!(matches!(err, CertificateDecodeError::Pem { .. }), "{err:?}");
    }

    #[test]
    fn rejects_wrong_tag() {
        let pem = "-----BEGIN PUBLIC KEY-----\nMIIB\n-----END PUBLIC KEY-----\n";
        let err = decode_entry(&entry(DEFAULT_ISSUER, pem)).unwrap_err();
        assert_eq!(
            err,
            CertificateDecodeError::UnexpectedTag {
                key_id: DEFAULT_ISSUER.to_string(),
                tag: "PUBLIC KEY".to_string(),
            }
        );
    }

    #[test]
    fn rejects_truncated_der() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
        let err = decode_entry(&entry(DEFAULT_ISSUER, pem)).unwrap_err();
        assert!(matches!(err, CertificateDecodeError::X509 { .. }), "{err:?}");
    }

    #[test]
    fn ski_must_be_present() {
        assert_eq!(
            issuer_key_id(DEFAULT_ISSUER, None),
            Err(CertificateDecodeError::MissingSubjectKeyIdentifier {
                key_id: DEFAULT_ISSUER.to_string(),
            })
        );
    }

    #[test]
    fn ski_of_wrong_length_is_a_certificate_defect() {
        let short = [0x81, 0x37, 0x0f, 0x51];
        let err = issuer_key_id(DEFAULT_ISSUER, Some(&short[..])).unwrap_err();
        assert!(
            matches!(&err, CertificateDecodeError::X509 { key_id, .. } if key_id == DEFAULT_ISSUER),
            "{err:?}"
        );
    }

    #[test]
    fn ski_bytes_become_key_id() {
        let bytes = [
            0x81, 0x37, 0x0f, 0x51, 0x25, 0xd0, 0xb1, 0xd4, 0x08, 0xd4, 0xc3, 0xb2, 0x32, 0xe6,
            0xd2, 0x5e, 0x79, 0x5b, 0xeb, 0xfb,
        ];
        let id = issuer_key_id(DEFAULT_ISSUER, Some(&bytes[..])).unwrap();
        assert_eq!(id.as_str(), DEFAULT_ISSUER);
    }

    #[test]
    fn rejects_key_id_mismatch() {
        let other = "4c27967ad20c14b391e9601e41e604ad57c0222f";
        let err = decode_entry(&entry(other, CI1_PEM)).unwrap_err();
        assert_eq!(
            err,
            CertificateDecodeError::KeyIdMismatch {
                expected: other.to_string(),
                found: DEFAULT_ISSUER.to_string(),
            }
        );
    }
}
