// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref HEX: Regex = Regex::new("^[a-fA-F0-9]+$").unwrap();
}

/// Explicit query type given with `-t`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeHint {
    Domain,
    Fingerprint,
    Skid,
}

impl TypeHint {
    /// Parses a hint case-insensitively. Empty and unknown hints are both treated as no hint, an
    /// unknown one just never matches any rule.
    pub fn parse(hint: &str) -> Option<Self> {
        let hint = hint.trim();
        if hint.eq_ignore_ascii_case("domain") {
            Some(Self::Domain)
        } else if hint.eq_ignore_ascii_case("fingerprint") {
            Some(Self::Fingerprint)
        } else if hint.eq_ignore_ascii_case("skid") {
            Some(Self::Skid)
        } else {
            if !hint.is_empty() {
                warn!("ignoring unknown query type {:?}", hint);
            }
            None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    /// Name understood by the database's `digest()` function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryKind {
    Domain,
    Fingerprint(DigestAlgorithm),
    Skid,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::Fingerprint(alg) => write!(f, "{} fingerprint", alg.name()),
            Self::Skid => f.write_str("SKID"),
        }
    }
}

fn is_hex_of_len(arg: &str, len: usize) -> bool {
    arg.len() == len && HEX.is_match(arg)
}

/// Decides which query to run for `arg`. A `.` anywhere in the argument always means a domain
/// search, even when a different hint was given.
pub fn classify(arg: &str, hint: Option<TypeHint>) -> Result<QueryKind, Error> {
    let kind = if hint == Some(TypeHint::Domain) || arg.contains('.') {
        QueryKind::Domain
    } else if hint == Some(TypeHint::Skid) {
        QueryKind::Skid
    } else if hint == Some(TypeHint::Fingerprint) || is_hex_of_len(arg, 40) {
        QueryKind::Fingerprint(DigestAlgorithm::Sha1)
    } else if is_hex_of_len(arg, 64) {
        // a fingerprint hint already matched sha1 above, whatever the length
        QueryKind::Fingerprint(DigestAlgorithm::Sha256)
    } else {
        return Err(Error::UnrecognizedQueryType(arg.to_string()));
    };
    debug!("classified {:?} as a {} query", arg, kind);
    Ok(kind)
}

#[cfg(test)]
mod test {
    use super::*;

    const SHA1: &str = "2e7f1c5d6b8a9e0f1a2b3c4d5e6f708192a3b4c5";
    const SHA256: &str = "7A2B5C6D8E9F0A1B2C3D4E5F60718293A4B5C6D7E8F90A1B2C3D4E5F60718293";

    #[test]
    fn parse_hints() {
        assert_eq!(TypeHint::parse("domain"), Some(TypeHint::Domain));
        assert_eq!(TypeHint::parse("Fingerprint"), Some(TypeHint::Fingerprint));
        assert_eq!(TypeHint::parse("SKID"), Some(TypeHint::Skid));
        assert_eq!(TypeHint::parse(""), None);
        assert_eq!(TypeHint::parse("serial"), None);
    }

    #[test]
    fn dot_means_domain() {
        for hint in [
            None,
            Some(TypeHint::Domain),
            Some(TypeHint::Fingerprint),
            Some(TypeHint::Skid),
        ] {
            assert_eq!(classify("example.com", hint).unwrap(), QueryKind::Domain);
        }
        // still a domain even when the rest would be a valid fingerprint
        let dotted = format!("{}.", &SHA1[..39]);
        assert_eq!(classify(&dotted, None).unwrap(), QueryKind::Domain);
    }

    #[test]
    fn domain_hint_without_dot() {
        assert_eq!(
            classify("localhost", Some(TypeHint::Domain)).unwrap(),
            QueryKind::Domain
        );
    }

    #[test]
    fn fingerprints_by_length() {
        assert_eq!(
            classify(SHA1, None).unwrap(),
            QueryKind::Fingerprint(DigestAlgorithm::Sha1)
        );
        assert_eq!(
            classify(SHA256, None).unwrap(),
            QueryKind::Fingerprint(DigestAlgorithm::Sha256)
        );
    }

    #[test]
    fn skid_hint_wins_over_shape() {
        assert_eq!(classify(SHA1, Some(TypeHint::Skid)).unwrap(), QueryKind::Skid);
        assert_eq!(classify("not-hex", Some(TypeHint::Skid)).unwrap(), QueryKind::Skid);
    }

    #[test]
    fn fingerprint_hint_is_always_sha1() {
        assert_eq!(
            classify(SHA256, Some(TypeHint::Fingerprint)).unwrap(),
            QueryKind::Fingerprint(DigestAlgorithm::Sha1)
        );
        assert_eq!(
            classify("abcd", Some(TypeHint::Fingerprint)).unwrap(),
            QueryKind::Fingerprint(DigestAlgorithm::Sha1)
        );
    }

    #[test]
    fn unrecognized() {
        for arg in ["ABCDEF01", "", &SHA1[..39], "zz7f1c5d6b8a9e0f1a2b3c4d5e6f708192a3b4c5"] {
            assert!(matches!(
                classify(arg, None),
                Err(Error::UnrecognizedQueryType(ref a)) if a == arg
            ));
        }
    }
}
