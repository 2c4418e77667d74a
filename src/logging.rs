//! Tracing subscriber setup.
//!
//! Logs go to stderr. The filter comes from `PASSGEN_LOG`, falling back to
//! warnings only (errors only with `--quiet`). Passwords are never logged.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV: &str = "PASSGEN_LOG";

pub fn init(quiet: bool) {
    let fallback = if quiet { "passgen=error" } else { "passgen=warn" };
    let filter = EnvFilter::try_from_env(ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
