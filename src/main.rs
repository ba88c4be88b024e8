//! CLI entry point for the sliding-tile puzzle engine

use clap::Parser;
use slidetile::io::cli::{Cli, CommandRunner};

fn main() -> slidetile::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    CommandRunner::new(cli).run()
}
