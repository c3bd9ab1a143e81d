use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Output goes to stderr so console
/// output on stdout stays machine-checkable. Safe to call more than once;
/// later calls are ignored.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
