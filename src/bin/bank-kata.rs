use std::fs::File;

use anyhow::{Context, Result};
use bank_kata::{bin_utils::Service, clock::SystemClock};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        clock: SystemClock,
        error_printer: Box::new(|line, err| {
            tracing::warn!(line, "Operation rejected: {err}");
        }),
    };
    service.run()
}
