use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

pub use tracing_appender::non_blocking::WorkerGuard;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Install the crate's subscriber: JSON console output plus a daily rolling
/// log file. Hosts embedding the form decide whether to call this at all.
///
/// The returned guard owns the file writer's flush thread; keep it alive
/// for as long as logging should reach the file.
pub fn init_tracing() -> WorkerGuard {
    // console layer for tracing-subscriber
    let console = fmt::Layer::new()
        .with_span_events(FmtSpan::CLOSE)
        .json()
        .with_filter(env_filter());

    // file appender layer for tracing-subscriber
    let file_appender = tracing_appender::rolling::daily("./", "account-form.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file = fmt::Layer::new()
        .with_writer(non_blocking)
        .json()
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();
    guard
}
