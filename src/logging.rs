//! Tracing initialization for embedders and tests.
//!
//! The library only emits events; nothing is installed unless a host calls
//! `init_tracing`. Level comes from `LogLevel` (RUST_LOG is not consulted),
//! output is compact text or JSON on stderr or a caller-supplied writer.
//! `try_init` is used so an existing global subscriber is left in place.

use chrono::{Local, SecondsFormat};
use std::fmt as stdfmt;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogLevel;

/// Local time, RFC 3339 with milliseconds.
struct LocalMillis;
impl FormatTime for LocalMillis {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().to_rfc3339_opts(SecondsFormat::Millis, false))
    }
}

fn filter_for(lvl: &LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(lvl.level_filter().into())
        .parse_lossy("")
}

/// Install a global subscriber writing to stderr. Returns true if this call installed it.
pub fn init_tracing(lvl: &LogLevel, json: bool) -> bool {
    init_tracing_with_writer(lvl, json, std::io::stderr)
}

/// Same as [`init_tracing`] with an explicit writer (a log file, a capture buffer).
pub fn init_tracing_with_writer<W>(lvl: &LogLevel, json: bool, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tsfmt::layer()
        .with_timer(LocalMillis)
        .with_target(true)
        .with_writer(writer);
    let subscriber = registry().with(filter_for(lvl));
    if json {
        subscriber.with(layer.json()).try_init().is_ok()
    } else {
        subscriber.with(layer.compact()).try_init().is_ok()
    }
}
