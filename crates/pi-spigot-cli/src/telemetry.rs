//! Console logging for the `pi-digits` binary.
//!
//! Spans and events are printed to stderr through `tracing_subscriber::fmt`,
//! keeping stdout free. Verbosity follows `RUST_LOG` and defaults to `info`;
//! `RUST_LOG=pi_spigot=trace` shows every digit request made against the
//! spigot.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()
        .context("failed to install tracing subscriber")
}
