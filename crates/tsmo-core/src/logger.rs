//! Log filtering for the tsmo crates.
//!
//! The library only emits through the `log` facade. Binaries pick a backend
//! and restrict it to [`LOG_TARGETS`] so dependency chatter (image decoders,
//! rayon) stays quiet at `debug`.

use log::LevelFilter;

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Log targets owned by this workspace.
pub const LOG_TARGETS: &[&str] = &["tsmo", "tsmo_core"];

/// Filter directives enabling `level` for [`LOG_TARGETS`] only, in
/// `RUST_LOG` syntax (`tsmo=debug,tsmo_core=debug`).
pub fn log_directives(level: LevelFilter) -> String {
    let level = level.as_str().to_ascii_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install a `tracing` subscriber for the pipeline spans.
///
/// `RUST_LOG` wins when set; otherwise [`log_directives`] for `level`.
/// `log` records are forwarded through the subscriber's `tracing-log` bridge.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(level)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}
