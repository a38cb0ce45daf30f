// SPDX-License-Identifier: Apache-2.0
use super::{Field, Render};
use ctsearch_db::Record;
use ctsearch_query::columns;
use std::fmt::Write;

impl Render for Record<'_> {
    fn render(&self) -> String {
        let field = |column: &str| Field(self.get(column));
        let mut out = format!("Certificate ID: {}", field(columns::ID));
        // only domain searches carry an entry timestamp
        if let Some(entered) = self.get(columns::ENTRY_TIMESTAMP).filter(|v| !v.is_null()) {
            let _ = write!(out, "  Entered: {}", entered);
        }
        let _ = write!(
            out,
            "
  Subject: {subject}
  Serial: {serial}
  Issuer: {issuer}
  NotBefore: {not_before}
  NotAfter: {not_after}
",
            subject = field(columns::SUBJECT_NAME),
            serial = field(columns::SERIAL_NUMBER),
            issuer = field(columns::ISSUER_NAME),
            not_before = field(columns::NOT_BEFORE),
            not_after = field(columns::NOT_AFTER),
        );
        out
    }
}
