use clap::Parser;

use stockroom_cli::{Args, ReportConfig};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    stockroom_observability::init(args.log_format.into());

    let config = ReportConfig::from(args);
    tracing::debug!(?config, "starting stock report");

    stockroom_cli::run(&config, &mut std::io::stdout().lock())
}
