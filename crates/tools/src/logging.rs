use std::io;

use tracing_subscriber::EnvFilter;

/// Installs a stderr formatter filtered by `RUST_LOG`, defaulting to `warn`.
/// Calling it twice is harmless; the second install is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}
