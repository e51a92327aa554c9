use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber for an interactive session.
///
/// Diagnostics go to stderr so they never interleave with menu output on
/// stdout. Defaults to warnings only; raise with `RUST_LOG`, e.g.
/// `RUST_LOG=course_catalog=debug` to see loader record counts.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("course_catalog=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
