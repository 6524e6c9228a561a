use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global stderr subscriber for the roast pipeline. `RUST_LOG`
/// wins when set; otherwise everything at `default` and above is shown.
/// Later calls are no-ops, so library tests and the binary can both call
/// this without fighting over the dispatcher.
pub fn init_logging(default: Level) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default.to_string()));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
