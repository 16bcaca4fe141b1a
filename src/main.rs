//! gpu-request: print the container device requests for a set of `--gpus`
//! specifications as JSON.

use clap::Parser;
use tracing::info;

use gpu_request::config::{Cli, Config};
use gpu_request::GpuOpts;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing/logging. stdout is reserved for the result.
    let filter = if cli.verbose {
        "gpu_request=debug"
    } else {
        "gpu_request=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("gpu-request v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration.
    let config = Config::load(&cli.config)?;

    let mut requests = config.device_requests()?;
    requests.extend(cli.gpus);
    let opts = GpuOpts::from(requests);

    info!(
        from_config = config.gpus.len(),
        total = opts.len(),
        "GPU requests parsed"
    );

    let json = if cli.pretty || config.output.pretty {
        serde_json::to_string_pretty(opts.value())?
    } else {
        serde_json::to_string(opts.value())?
    };
    println!("{json}");

    Ok(())
}
