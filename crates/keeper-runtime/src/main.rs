//! # Keeper Host
//!
//! Native-messaging host entry point. Stdout carries the protocol; all
//! diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use keeper_runtime::{build_dispatcher, current_build_info, open_store, serve, RuntimeConfig};
use keeper_telemetry::{init_telemetry, TelemetryConfig};
use kp_04_protocol_handlers::EMBEDDED_SERVER_PUBLIC_KEY;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let config = RuntimeConfig::parse();

    let telemetry = TelemetryConfig::from_env();
    if let Err(e) = init_telemetry(&telemetry) {
        eprintln!("keeper-host: logging disabled: {}", e);
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let chain = format!("{:#}", e);
            error!(error = %chain, "keeper host terminated");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RuntimeConfig) -> Result<()> {
    info!("===========================================");
    info!("  Keeper Host v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!(caller = ?config.caller, store = ?config.store, "starting");

    let build = current_build_info();
    info!(hash = %build.hash, path = %build.path, "build identity");

    let store = open_store(&config)?;
    let dispatcher = build_dispatcher(store, build, EMBEDDED_SERVER_PUBLIC_KEY)
        .context("failed to install server public key")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;

    runtime.block_on(async {
        let mut messenger = kp_03_message_transport::stdio();
        serve(&mut messenger, &dispatcher)
            .await
            .context("transport failure")
    })
}
