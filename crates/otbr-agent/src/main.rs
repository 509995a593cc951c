//! `otbr-agent` – border router agent entry point.
//!
//! Startup sequence:
//!
//! 1. Parse flags and load `/etc/otbr/agent.toml` (flags win over `OTBR_*`
//!    environment variables, which win over the file).
//! 2. Publish the host log level and initialise `tracing` from it.
//! 3. Hand the radio URLs to [`ThreadController::create`], which installs the
//!    stack log level, discovers the co-processor and builds the host.  Any
//!    failure there terminates the process.
//! 4. Initialise the host, then run until Ctrl-C (or exit straight away on
//!    `--dry-run`) and deinitialise it.

mod cli;
mod config;
mod telemetry;

use std::process::ExitCode;
use std::sync::mpsc;

use clap::Parser;
use tracing::{error, info, warn};

use otbr_hal::{ConfiguredProbe, SystemPlatform, logging};
use otbr_ncp::ThreadController;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut cfg = match config::load(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[otbr] config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut cfg);

    // ── Structured logging ────────────────────────────────────────────────
    logging::set_host_log_level(cfg.log_level);
    let _guard = telemetry::init_tracing("otbr-agent", cfg.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %path.display(),
        interface = %cfg.interface_name,
        log_level = %cfg.log_level,
        "starting otbr-agent"
    );

    // ── Co-processor bootstrap ────────────────────────────────────────────
    let mut platform = SystemPlatform::new(ConfiguredProbe::new(cfg.coprocessor));
    let mut host = ThreadController::create(
        &cfg.interface_name,
        &cfg.radio_urls,
        cfg.backbone_interface.as_deref(),
        cfg.dry_run,
        cfg.auto_attach,
        &mut platform,
    );

    if let Err(e) = host.init() {
        error!(error = %e, interface = %host.interface_name(), "failed to initialize host");
        return ExitCode::FAILURE;
    }

    if cfg.dry_run {
        info!(kind = %host.coprocessor_kind(), "dry run complete");
        host.deinit();
        return ExitCode::SUCCESS;
    }

    // ── Run until Ctrl-C ──────────────────────────────────────────────────
    let (stop_tx, stop_rx) = mpsc::channel();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        warn!(error = %e, "Failed to install Ctrl-C handler; stopping immediately");
        host.deinit();
        return ExitCode::FAILURE;
    }

    info!(interface = %host.interface_name(), "border router agent running");
    let _ = stop_rx.recv();
    info!("shutdown requested");
    host.deinit();
    ExitCode::SUCCESS
}
