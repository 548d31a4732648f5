use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod runner;

#[cfg(test)]
mod tests;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linguo=info,linguo_core=info,linguo_config=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let mut stdout = std::io::stdout().lock();
    runner::run(&config, cli.dry_run, &mut stdout)?;

    Ok(())
}
