use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset; keeps a plain run down to the success line
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
