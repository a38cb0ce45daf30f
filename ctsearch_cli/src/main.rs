// SPDX-License-Identifier: Apache-2.0
use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use ctsearch_db::{Config, Executor};
use ctsearch_query::TypeHint;
use log::debug;
use std::{
    io::{self, Write},
    process::ExitCode,
};

mod cli;

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let hint = cli.query_type.as_deref().and_then(TypeHint::parse);
    // classify before connecting so a bad query never touches the network
    let kind = ctsearch_query::classify(&cli.query, hint).context("classifying query")?;
    let query = kind.bind(&cli.query);

    let config = match &cli.database {
        Some(conninfo) => Config::parse(conninfo).context("reading database connection string")?,
        None => Config::default(),
    };
    let executor = Executor::connect(&config)
        .await
        .context("connecting to database")?;
    let results = executor.run(&query).await;
    executor.close().await;
    let results = results.with_context(|| format!("running {} query", kind))?;
    debug!("rendering {} records", results.len());

    let out = ctsearch_render::render(&results, cli.output).context("rendering output")?;
    io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("writing output")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // usage errors exit with 1 like every other failure
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
