mod cli;
mod decay;
mod input;
mod prelude;
mod quantity;
mod report;

use std::io::{self, Write};

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*, report::Report};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let cups = Args::parse().cups()?;
    let consumed = cups.caffeine()?;
    debug!(%cups, %consumed, "consumed");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", Report::new(consumed)).context("failed to write the report")?;
    stdout.flush().context("failed to flush the report")?;

    info!("done!");
    Ok(())
}
