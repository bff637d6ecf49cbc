use tracing_subscriber::EnvFilter;

/// Logs go to stderr, stdout belongs to the report.
///
/// RUST_LOG wins when set. Otherwise only warnings, or debug with `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cost_per_user=debug,warn"
    } else {
        "cost_per_user=warn"
    }
}
