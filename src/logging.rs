//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `plowins=debug`.
pub const LOG_ENV: &str = "PLOWINS_LOG";

/// Install a stderr fmt subscriber.
///
/// `PLOWINS_LOG` wins when set; otherwise `default_level` applies.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
