// SPDX-License-Identifier: Apache-2.0
//! Classification of a command-line query and the fixed crt.sh SQL it maps to.

mod classify;
pub mod columns;
pub mod templates;

pub use classify::{classify, DigestAlgorithm, QueryKind, TypeHint};
pub use templates::BoundQuery;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "unrecognized query type for {0:?} (expected a domain, a 40 or 64 character hex fingerprint, or `-t skid`)"
    )]
    UnrecognizedQueryType(String),
}
