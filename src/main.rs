mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docpipe=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run()
}
