//! Pet shelter adoption-fee keeper.
//!
//! Reads actions from stdin (`add`, `fee`, `exit`) and answers on stdout.
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use tracing::debug;

use shelter::config::ShelterConfig;
use shelter::exit_codes;
use shelter::logging;
use shelter::session::run_stdio;

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{:#}", err);
    }
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let config = ShelterConfig::builtin()?;
    let end = run_stdio(&config).context("run shelter session")?;
    debug!(?end, "exiting");
    Ok(())
}
