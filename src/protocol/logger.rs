//! Stderr subscriber for the binary, filtered by [`LOG_ENV`] and
//! adjustable at runtime through the `Log Level` option.

use std::io;

use once_cell::sync::OnceCell;
use tracing::warn;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, registry, reload, Registry};

/// Environment variable holding the initial filter directives.
pub const LOG_ENV: &str = "CHESS_RULES_LOG";

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

static FILTER: OnceCell<reload::Handle<EnvFilter, Registry>> = OnceCell::new();

/// Parse `off|error|warn|info|debug|trace`, case-insensitively.
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Filter for `directives`, falling back to [`DEFAULT_LEVEL`] when none apply.
#[must_use]
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .parse_lossy(directives)
}

/// Most verbose level `filter` lets through.
#[must_use]
pub fn max_level(filter: &EnvFilter) -> LevelFilter {
    filter.max_level_hint().unwrap_or(DEFAULT_LEVEL)
}

/// Install the global subscriber and return the level it starts at.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<LevelFilter, TryInitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let level = max_level(&filter);

    let (filter, handle) = reload::Layer::new(filter);
    let writer = fmt::layer().with_target(true).with_writer(io::stderr);
    registry().with(filter).with(writer).try_init()?;

    if FILTER.set(handle).is_err() {
        warn!("log filter handle already registered");
    }
    Ok(level)
}

/// Replace the active filter with a single `level`. Without an installed
/// subscriber this does nothing.
pub fn set_level(level: LevelFilter) {
    let Some(handle) = FILTER.get() else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::default().add_directive(level.into())) {
        warn!("could not change log level: {e}");
    }
}
