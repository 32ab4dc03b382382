// Entry point: renders the IPC benchmark comparison figures.
use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ipc_charts::cli::Args;
use ipc_charts::config::ChartsConfig;
use ipc_charts::report;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ipc_charts=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args
        .config
        .as_deref()
        .map(ChartsConfig::load_or_default)
        .unwrap_or_default();

    let written = report::render_all(&args.out_dir, &args.metrics(), &config)?;
    for path in &written {
        println!("Plot saved: {}", path.display());
    }
    Ok(())
}
