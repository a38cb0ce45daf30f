// SPDX-License-Identifier: Apache-2.0
//! Connection to the crt.sh database and decoding of the rows it returns.

use ctsearch_query::BoundQuery;
use log::{debug, info, warn};
use postgres_types::{ToSql, Type};
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio_postgres::{config::SslMode, Client, NoTls};

mod param;
mod rows;
mod value;

pub use rows::{materialize, Record, ResultSet};
pub use value::Value;

use param::TextParam;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database connection failed")]
    Connection(#[source] tokio_postgres::Error),
    #[error("query was rejected")]
    QueryExecution(#[source] tokio_postgres::Error),
    #[error("cannot decode column {column:?}")]
    RowDecode {
        column: String,
        #[source]
        source: tokio_postgres::Error,
    },
    #[error("row has {found} columns but the result set has {expected}")]
    RowWidth { expected: usize, found: usize },
}

impl Error {
    fn from_query(e: tokio_postgres::Error) -> Self {
        if e.is_closed() {
            Self::Connection(e)
        } else {
            Self::QueryExecution(e)
        }
    }
}

/// Where to connect. Defaults to crt.sh's public guest access.
#[derive(Debug, Clone)]
pub struct Config {
    pg: tokio_postgres::Config,
}

impl Default for Config {
    fn default() -> Self {
        let mut pg = tokio_postgres::Config::new();
        pg.host("crt.sh")
            .port(5432)
            .user("guest")
            .dbname("certwatch")
            .ssl_mode(SslMode::Disable);
        Self { pg }
    }
}

impl Config {
    /// Parses a libpq-style connection string, e.g. `host=crt.sh user=guest dbname=certwatch`.
    pub fn parse(conninfo: &str) -> Result<Self, Error> {
        let pg = conninfo.parse().map_err(Error::Connection)?;
        Ok(Self { pg })
    }

    /// Hosts and database name, without credentials.
    pub fn describe(&self) -> String {
        format!(
            "{:?} database {:?}",
            self.pg.get_hosts(),
            self.pg.get_dbname().unwrap_or_default()
        )
    }
}

/// Owns the single database connection of a run. Dropping it closes the connection.
pub struct Executor {
    client: Client,
    connection: JoinHandle<()>,
}

impl Executor {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        info!("connecting to {}", config.describe());
        let (client, connection) = config.pg.connect(NoTls).await.map_err(Error::Connection)?;
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!("database connection error: {}", e);
            }
        });
        Ok(Self { client, connection })
    }

    /// Runs a bound query and materializes every row it returns.
    pub async fn run(&self, query: &BoundQuery) -> Result<ResultSet, Error> {
        // crt.sh sits behind a pooler that drops named statements, and the templates rely on the
        // server inferring parameter types, so everything goes as untyped text in one round trip
        let params: Vec<TextParam> = query.params.iter().map(|p| TextParam(p)).collect();
        let typed: Vec<(&(dyn ToSql + Sync), Type)> = params
            .iter()
            .map(|p| (p as &(dyn ToSql + Sync), Type::UNKNOWN))
            .collect();
        debug!("running {} query with {:?}", query.kind, query.params);

        let start = Instant::now();
        let rows = self
            .client
            .query_typed(query.sql, &typed)
            .await
            .map_err(Error::from_query)?;
        info!(
            "{} query returned {} rows in {:?}",
            query.kind,
            rows.len(),
            start.elapsed()
        );
        materialize(&rows)
    }

    /// Closes the connection and waits for its task to wind down.
    pub async fn close(self) {
        drop(self.client);
        if let Err(e) = self.connection.await {
            warn!("database connection task failed: {}", e);
        }
    }
}
