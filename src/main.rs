//! layered-config: resolve and validate layered configuration

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    layered_config::cli::run()
}
