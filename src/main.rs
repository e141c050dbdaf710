use clap::Parser;
use roshambo::cli::Args;

fn main() -> anyhow::Result<()> {
    Args::parse().run()
}
