// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use ctsearch_render::OutputFormat;

/// Search crt.sh's certificate transparency database.
///
/// The query is a domain (anything containing a dot), a 40 or 64 character hex SHA-1 or SHA-256
/// fingerprint, or with `-t skid` a hex Subject Key Identifier.
#[derive(Debug, Parser)]
#[command(name = "ctsearch", version)]
pub struct Cli {
    /// Type of the query: domain, fingerprint or skid. Required for SKID queries, guessed from
    /// the query otherwise.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub query_type: Option<String>,

    /// Output format: list, text or json.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FORMAT",
        default_value = "list",
        value_parser = parse_format
    )]
    pub output: OutputFormat,

    /// libpq-style connection string for the certificate database.
    #[arg(long, value_name = "CONNINFO", env = "CTSEARCH_DATABASE", hide_env_values = true)]
    pub database: Option<String>,

    /// Domain, fingerprint or SKID to look up.
    pub query: String,
}

fn parse_format(s: &str) -> Result<OutputFormat, ctsearch_render::Error> {
    s.parse()
}
