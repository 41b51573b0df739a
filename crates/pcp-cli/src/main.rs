use clap::Parser;
use pcp_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
