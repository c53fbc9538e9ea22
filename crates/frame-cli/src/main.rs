//! Picture frame generator entry point

use clap::Parser;
use frame_cli::Cli;

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frame_cli=info,frame_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(err) = frame_cli::run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
