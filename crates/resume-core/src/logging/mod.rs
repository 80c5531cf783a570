use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
///
/// Logs are written as JSON to stderr so that user-facing output on stdout
/// stays clean.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    // Both the CLI and core crates log; one directive per target.
    let filter = ["resume", "resume_core"]
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, target| {
            filter.add_directive(
                format!("{target}={level}")
                    .parse()
                    .expect("Invalid log directive"),
            )
        });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_logging() {
        // Can only install a global subscriber once per process, so this is
        // exercised via the CLI integration tests instead.
    }
}
