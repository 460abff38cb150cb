mod config;
mod driver;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use telemetry::init_telemetry;

// The spigot allocates fresh big integers on every iteration.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let summary = driver::run(&config)?;
    tracing::info!(
        "Wrote {} digits of pi to {} in {:?}",
        summary.digits,
        config.output.display(),
        summary.elapsed
    );
    Ok(())
}

fn log_startup_info(config: &Config) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting pi-digits with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Starting pi-digits for {} digits into {}",
            config.digits,
            config.output.display()
        );
    }
}
