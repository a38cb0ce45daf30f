// SPDX-License-Identifier: Apache-2.0
//! Column names produced by the query templates. Postgres folds the unquoted aliases in the
//! templates to lowercase, so these are exactly what the server reports.

pub const ISSUER_CA_ID: &str = "issuer_ca_id";
pub const ISSUER_NAME: &str = "issuer_name";
pub const COMMON_NAME: &str = "common_name";
pub const NAME_VALUE: &str = "name_value";
pub const ID: &str = "id";
pub const ENTRY_TIMESTAMP: &str = "entry_timestamp";
pub const NOT_BEFORE: &str = "not_before";
pub const NOT_AFTER: &str = "not_after";
pub const SERIAL_NUMBER: &str = "serial_number";
pub const SUBJECT_NAME: &str = "subject_name";
pub const FORMATTED: &str = "formatted";

/// Columns of a domain search, in result order.
pub const DOMAIN: [&str; 11] = [
    ISSUER_CA_ID,
    ISSUER_NAME,
    COMMON_NAME,
    NAME_VALUE,
    ID,
    ENTRY_TIMESTAMP,
    NOT_BEFORE,
    NOT_AFTER,
    SERIAL_NUMBER,
    SUBJECT_NAME,
    FORMATTED,
];

/// Columns of a fingerprint or SKID lookup, in result order. `issuer_name` holds the issuer's CA
/// id as text here.
pub const CERTIFICATE: [&str; 7] = [
    ID,
    FORMATTED,
    SUBJECT_NAME,
    SERIAL_NUMBER,
    NOT_AFTER,
    NOT_BEFORE,
    ISSUER_NAME,
];
