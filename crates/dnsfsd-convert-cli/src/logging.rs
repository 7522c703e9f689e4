// crates/dnsfsd-convert-cli/src/logging.rs

use std::{env, io};

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log to stderr only; stdout carries the converted rules. Call once per process.
pub fn init() {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();
}
