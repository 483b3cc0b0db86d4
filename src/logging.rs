//! Browser console logging through `tracing-wasm`.
//!
//! The module's start function installs a subscriber whose level sits behind
//! a reload handle, so `setLogLevel` can change verbosity at runtime. Native
//! builds and tests never install it, so `tracing` macros in the core are
//! no-ops there.

use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, Registry};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

use crate::error::TreeError;

/// Default verbosity in the browser.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

type LevelHandle = reload::Handle<LevelFilter, Registry>;

static LEVEL: OnceLock<LevelHandle> = OnceLock::new();

/// Console subscriber filtered at `level`, plus the handle that adjusts it.
fn console_subscriber(level: LevelFilter) -> (impl Subscriber + Send + Sync, LevelHandle) {
    let (filter, handle) = reload::Layer::new(level);
    let config = WASMLayerConfigBuilder::new()
        .set_report_logs_in_timings(false)
        .build();
    let subscriber = Registry::default()
        .with(filter)
        .with(WASMLayer::new(config));
    (subscriber, handle)
}

/// Route `tracing` events to the browser console at the given level.
///
/// Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if LEVEL.get().is_some() {
        let _ = set_level(level);
        return;
    }

    let (subscriber, handle) = console_subscriber(level);
    // Err means another subscriber owns the process; leave it alone.
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = LEVEL.set(handle);
    }
}

/// Change the console level.
///
/// A no-op when no console subscriber is installed.
pub fn set_level(level: LevelFilter) -> Result<(), TreeError> {
    match LEVEL.get() {
        Some(handle) => handle
            .reload(level)
            .map_err(|err| TreeError::InvalidConfig(format!("cannot set log level: {err}"))),
        None => Ok(()),
    }
}

/// Parse `off`, `error`, `warn`, `info`, `debug` or `trace` (any case).
pub fn parse_level(name: &str) -> Result<LevelFilter, TreeError> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| TreeError::InvalidConfig(format!("unknown log level: {name}")))
}
