//! Titlescan CLI: scan a TSV title dataset with filters; optionally enrich matches via OMDb.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use titlescan::engine::{Cli, handle_run};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
