//! Main entry point for seqcolor

use anyhow::{Context, Result};
use clap::Parser;

use seqcolor::{cli::Cli, config::Config, pipeline};

fn main() -> Result<()> {
    let cli = Cli::parse();

    seqcolor::logging::init(cli.verbose)?;

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let job = cli.to_job()?;
    let summary = pipeline::run(&job, &config)
        .with_context(|| format!("Failed to render {:?}", job.input))?;

    tracing::info!(
        residues = summary.residues,
        rows = summary.rows,
        last_residue = summary.final_count,
        "Done"
    );
    Ok(())
}
