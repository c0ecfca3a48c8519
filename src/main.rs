//! # nncalc Main Entry Point

use anyhow::{Context, Result};
use nncalc::calc::io::{TerminalEventStream, TerminalRenderStream};
use nncalc::cmd_args::CommandLineArgs;
use nncalc::config::{Settings, LOG_LEVEL_ENV_VAR};
use nncalc::AppController;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let settings = Settings::resolve(&cmd_args).context("failed to load configuration")?;

    let mut app = AppController::with_io_streams(
        settings,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run()
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_LEVEL_ENV_VAR))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
