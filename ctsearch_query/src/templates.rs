// SPDX-License-Identifier: Apache-2.0
//! The three fixed queries against the crt.sh `certwatch` schema.

use crate::QueryKind;

/// `name_type` of DNS subjectAltName entries in `certificate_and_identities`.
pub const NAME_TYPE_DNS: &str = "san:dNSName";
/// Identity rows considered by a domain search before aggregating by certificate.
pub const DOMAIN_CANDIDATE_LIMIT: u32 = 10_000;

pub const DOMAIN: &str = include_str!("queries/domain.sql");
pub const FINGERPRINT: &str = concat!(
    include_str!("queries/certificate.sql"),
    include_str!("queries/fingerprint.sql")
);
pub const SKID: &str = concat!(
    include_str!("queries/certificate.sql"),
    include_str!("queries/skid.sql")
);

/// A template together with the positional parameters for it. Parameters are always sent
/// separately from the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundQuery {
    pub kind: QueryKind,
    pub sql: &'static str,
    pub params: Vec<String>,
}

/// Hex string as a bytea literal, the form the server parses into raw bytes.
fn bytea_literal(hex: &str) -> String {
    format!("\\x{}", hex)
}

impl QueryKind {
    pub fn template(self) -> &'static str {
        match self {
            Self::Domain => DOMAIN,
            Self::Fingerprint(_) => FINGERPRINT,
            Self::Skid => SKID,
        }
    }

    pub fn bind(self, arg: &str) -> BoundQuery {
        let params = match self {
            Self::Domain => vec![format!("%.{}", arg), NAME_TYPE_DNS.to_string()],
            Self::Fingerprint(alg) => vec![alg.name().to_string(), bytea_literal(arg)],
            Self::Skid => vec![bytea_literal(arg)],
        };
        BoundQuery {
            kind: self,
            sql: self.template(),
            params,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{columns, DigestAlgorithm};

    fn placeholders(sql: &str) -> usize {
        (1..=9).filter(|i| sql.contains(&format!("${}", i))).count()
    }

    #[test]
    fn params_match_placeholders() {
        for kind in [
            QueryKind::Domain,
            QueryKind::Fingerprint(DigestAlgorithm::Sha1),
            QueryKind::Fingerprint(DigestAlgorithm::Sha256),
            QueryKind::Skid,
        ] {
            let bound = kind.bind("abcd");
            assert_eq!(bound.params.len(), placeholders(bound.sql), "{}", kind);
        }
    }

    #[test]
    fn domain_params() {
        let bound = QueryKind::Domain.bind("example.com");
        assert_eq!(bound.sql, DOMAIN);
        assert_eq!(bound.params, vec!["%.example.com", "san:dNSName"]);
    }

    #[test]
    fn fingerprint_params() {
        let bound = QueryKind::Fingerprint(DigestAlgorithm::Sha256).bind("00ff");
        assert_eq!(bound.sql, FINGERPRINT);
        assert_eq!(bound.params, vec!["sha256", r"\x00ff"]);
    }

    #[test]
    fn skid_params() {
        let bound = QueryKind::Skid.bind("A1B2");
        assert_eq!(bound.sql, SKID);
        assert_eq!(bound.params, vec![r"\xA1B2"]);
    }

    #[test]
    fn arguments_never_reach_sql() {
        let evil = "x'; DROP TABLE ca; --";
        for kind in [QueryKind::Domain, QueryKind::Skid] {
            assert!(!kind.bind(evil).sql.contains(evil));
        }
    }

    #[test]
    fn domain_limits_candidates() {
        assert!(DOMAIN.contains(&format!("LIMIT {}", DOMAIN_CANDIDATE_LIMIT)));
        assert!(DOMAIN.contains("ORDER BY le.entry_timestamp DESC NULLS LAST"));
    }

    #[test]
    fn templates_select_known_columns() {
        for column in columns::DOMAIN {
            assert!(DOMAIN.contains(column), "{} missing", column);
        }
        for sql in [FINGERPRINT, SKID] {
            for column in columns::CERTIFICATE {
                assert!(sql.contains(column), "{} missing", column);
            }
        }
    }
}
