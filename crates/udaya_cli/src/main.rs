use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use udaya_cli::{Cli, EngineEphemeris, Request, compute};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ephemeris = EngineEphemeris::load(cli.engine_config(), cli.ayanamsha)
        .context("loading ephemeris kernels")?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading request from stdin")?;
    let request = Request::from_json(&input).context("decoding request")?;

    let response = compute(&ephemeris, &request).with_context(|| {
        format!(
            "computing {} windows for {:04}-{:02}-{:02}",
            request.time_hint, request.year, request.month, request.day
        )
    })?;

    let json = response
        .to_json(cli.pretty)
        .context("encoding response")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("writing response")?;
    Ok(())
}
