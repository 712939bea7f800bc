//! # Activation Code Test Vectors
//!
//! Fixed inputs and their canonical forms, covering the shapes seen on real
//! QR codes: bare SM-DP+ addresses, matching identifiers from carrier
//! portals, SM-DS discovery codes carrying an OID, and codes requiring a
//! confirmation code. Every vector must be accepted, canonicalize to the
//! expected text, and re-parse to the same record.

use euicc_core::{ActivationCode, ActivationCodeError, ValidationError};

/// (input, expected canonical form)
const ACCEPTED: &[(&str, &str)] = &[
    ("LPA:1$rsp.truphone.com$QRF-SPEEDTEST", "1$rsp.truphone.com$QRF-SPEEDTEST"),
    (
        "LPA:1$smdp.example.com$04386-AGYFT-A74Y8-3F815$1.3.6.1.4.1.31746$1",
        "1$smdp.example.com$04386-AGYFT-A74Y8-3F815$1.3.6.1.4.1.31746$1",
    ),
    ("LPA:1$lpa.ds.gsma.com", "1$lpa.ds.gsma.com"),
    ("1$lpa.ds.gsma.com$$1.3.6.1.4.1.31746", "1$lpa.ds.gsma.com$$1.3.6.1.4.1.31746"),
    ("LPA:1$smdp.example.com$$$1", "1$smdp.example.com$$$1"),
    ("LPA:1$smdp.example.com$$$0", "1$smdp.example.com"),
    ("LPA:1$smdp.example.com$$$", "1$smdp.example.com"),
    ("LPA:1$ smdp.example.com $ MID $ ", "1$smdp.example.com$MID"),
    ("1$smdp.example.com$MID$$1$reserved", "1$smdp.example.com$MID$$1"),
    ("1$", "1$"),
];

/// (input, expected error)
fn rejected() -> Vec<(&'static str, ActivationCodeError)> {
    vec![
        ("", ActivationCodeError::TooFewFields { found: 1 }),
        ("smdp.example.com", ActivationCodeError::TooFewFields { found: 1 }),
        ("LPA:", ActivationCodeError::TooFewFields { found: 1 }),
        ("LPA:2$smdp.example.com", ActivationCodeError::UnsupportedVersion("2".into())),
        ("LPA:LPA:1$smdp.example.com", ActivationCodeError::UnsupportedVersion("LPA:1".into())),
        ("01$smdp.example.com", ActivationCodeError::UnsupportedVersion("01".into())),
        ("https://smdp.example.com$x", ActivationCodeError::UnsupportedVersion("https://smdp.example.com".into())),
    ]
}

#[test]
fn accepted_vectors_canonicalize() {
    for (input, expected) in ACCEPTED {
        let canonical = ActivationCode::canonicalize(input)
            .unwrap_or_else(|e| panic!("rejected {input:?}: {e}"));
        assert_eq!(canonical, *expected, "canonical mismatch for {input:?}");
    }
}

#[test]
fn accepted_vectors_reparse_identically() {
    for (input, expected) in ACCEPTED {
        let from_input = ActivationCode::parse(input).unwrap();
        let from_canonical = ActivationCode::parse(expected).unwrap();
        assert_eq!(from_input, from_canonical, "reparse mismatch for {input:?}");
    }
}

#[test]
fn rejected_vectors_fail_with_expected_kind() {
    for (input, expected) in rejected() {
        assert_eq!(ActivationCode::parse(input), Err(expected), "input {input:?}");
    }
}

#[test]
fn errors_render_for_display() {
    let err = ActivationCode::parse("2$x").unwrap_err();
    assert!(err.to_string().contains("unsupported version"));
    let err = ActivationCode::parse("x").unwrap_err();
    assert!(err.to_string().contains("at least 2 fields"));
}

#[test]
fn download_gate_rejects_unusable_addresses() {
    let empty = ActivationCode::parse("LPA:1$$MID").unwrap();
    assert_eq!(empty.smdp_address(), Err(ValidationError::EmptyAddress));

    let port = ActivationCode::parse("LPA:1$smdp.example.com:8443$MID").unwrap();
    assert!(matches!(port.smdp_address(), Err(ValidationError::InvalidAddress(_))));

    let good = ActivationCode::parse("LPA:1$smdp.example.com$MID").unwrap();
    assert_eq!(good.smdp_address().unwrap().as_str(), "smdp.example.com");
}
