// Diagnostic logging on stderr. Stdout carries the SQL script and nothing else.
// RUST_LOG wins when set; otherwise --debug selects DEBUG and the default is WARN.

use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn is_debug() -> bool {
    tracing::enabled!(tracing::Level::DEBUG)
}
