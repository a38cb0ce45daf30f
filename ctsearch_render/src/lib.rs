// SPDX-License-Identifier: Apache-2.0
//! Rendering of query results for the terminal.

use ctsearch_db::{ResultSet, Value};
use ctsearch_query::columns;
use log::trace;
use std::{fmt, str::FromStr};

mod list;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot encode results as JSON")]
    Serialization(#[source] serde_json::Error),
    #[error("unknown output format {0:?} (expected list, text or json)")]
    UnknownFormat(String),
}

pub trait Render {
    fn render(&self) -> String;
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Six-line summary per certificate.
    #[default]
    List,
    /// Full certificate text only.
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Displays a column that may be missing from the record, the same way as a null.
pub(crate) struct Field<'a>(Option<&'a Value>);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => fmt::Display::fmt(&Value::Null, f),
        }
    }
}

/// Renders every record in order. The output only depends on `results` and `format`.
pub fn render(results: &ResultSet, format: OutputFormat) -> Result<String, Error> {
    trace!("rendering {} records as {:?}", results.len(), format);
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(results).map_err(Error::Serialization)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Text => Ok(results
            .records()
            .map(|record| format!("{}\n", Field(record.get(columns::FORMATTED))))
            .collect()),
        OutputFormat::List => Ok(results.records().map(|record| record.render()).collect()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("list".parse::<OutputFormat>().unwrap(), OutputFormat::List);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(ref f)) if f == "yaml"
        ));
        assert_eq!(OutputFormat::default(), OutputFormat::List);
    }

    #[test]
    fn empty_results() {
        let empty = ResultSet::default();
        assert_eq!(render(&empty, OutputFormat::Json).unwrap(), "[]\n");
        assert_eq!(render(&empty, OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&empty, OutputFormat::List).unwrap(), "");
    }

    #[test]
    fn text_prints_formatted_only() {
        let mut set = ResultSet::new(vec![
            columns::ID.to_string(),
            columns::FORMATTED.to_string(),
        ]);
        set.push(vec![
            Value::Integer(1),
            Value::String("Certificate:\n    Data: ...".to_string()),
        ])
        .unwrap();
        set.push(vec![Value::Integer(2), Value::Null]).unwrap();
        assert_eq!(
            render(&set, OutputFormat::Text).unwrap(),
            "Certificate:\n    Data: ...\n(none)\n"
        );
    }
}
