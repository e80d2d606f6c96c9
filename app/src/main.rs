use barcraft_app::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    barcraft_app::init_tracing(cli.verbose);

    tracing::debug!("Starting barcraft v{}", env!("CARGO_PKG_VERSION"));
    barcraft_app::run(cli)
}
