#![forbid(unsafe_code)]

//! Tracing subscriber setup for test runs.
//!
//! Filters come from `SHALLOW_LOG` (same syntax as `RUST_LOG`), falling
//! back to `info`. Installation is idempotent: a second call, or a call
//! after another subscriber was installed, returns `false`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SHALLOW_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber, as JSON lines when `json` is set.
pub fn init_tracing(json: bool) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
