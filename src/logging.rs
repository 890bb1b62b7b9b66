//! Logging init: `env_logger` on stderr, driven by the `--log-level` flag.
//!
//! Stdout carries nothing but resolved paths, so every diagnostic goes to
//! stderr. When the flag is left at its default, a `RUST_LOG` filter from the
//! environment takes over so individual modules can be traced.

use std::env;

use env_logger::{Builder, Target};

/// Level used when `--log-level` is not given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Log levels accepted by `--log-level`.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Choose the filter directive from the CLI level and an optional `RUST_LOG`.
pub fn filter_directives(level: &str, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if level == DEFAULT_LEVEL && !directives.trim().is_empty() => directives,
        _ => level.to_string(),
    }
}

/// Install the global logger. Later calls are no-ops.
pub fn init(level: &str) {
    let directives = filter_directives(level, env::var("RUST_LOG").ok());

    let installed = Builder::new()
        .parse_filters(&directives)
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();

    if installed.is_ok() {
        log::debug!("logging initialized with filter {:?}", directives);
    }
}
