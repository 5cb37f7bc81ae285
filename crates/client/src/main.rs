//! vidcfg client
//!
//! Runs the host on the headless renderer, reading console commands from
//! stdin one line per frame. A fatal error shuts the client down with a
//! non-zero exit status.

mod app;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vidcfg_core::{config, CoreConfig, Host};
use vidcfg_engine::{EngineInterfaces, HeadlessRenderer, LogConsole};

fn main() -> ExitCode {
    let config_result = CoreConfig::load();
    let debug = config_result.as_ref().map(|c| c.debug).unwrap_or(false);

    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = config_result.unwrap_or_else(|err| {
        tracing::warn!("Using default core config: {}", err);
        CoreConfig::default()
    });

    tracing::info!("vidcfg {} starting...", env!("CARGO_PKG_VERSION"));

    let video_config = config::video_config_path().ok();
    let engine = EngineInterfaces::new(
        Arc::new(HeadlessRenderer::default()),
        Arc::new(LogConsole),
    );

    let host = match Host::new(engine, &config, video_config.as_deref()) {
        Ok(host) => host,
        Err(err) => return app::fatal(&err),
    };

    let stdin = std::io::stdin();
    match app::run(host, stdin.lock(), video_config.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => app::fatal(&err),
    }
}
