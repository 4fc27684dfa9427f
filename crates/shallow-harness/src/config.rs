#![forbid(unsafe_code)]

//! Session configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! ```sh
//! SHALLOW_PROP_ORDER=sorted SHALLOW_TRACE_QUERIES=1 cargo test
//! ```

use shallow_query::PropOrder;

/// Attribute order used by HTML serialization (`declared` / `sorted`).
pub const ENV_PROP_ORDER: &str = "SHALLOW_PROP_ORDER";
/// When set, every query is logged at `info` instead of `trace`.
pub const ENV_TRACE_QUERIES: &str = "SHALLOW_TRACE_QUERIES";

/// Knobs shared by a session and every sub-scope created from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Attribute order for `to_html` / `Display` / digests.
    pub prop_order: PropOrder,
    /// Log each query at `info` level.
    pub trace_queries: bool,
}

impl SessionConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup (used by tests).
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_PROP_ORDER) {
            match PropOrder::from_name(&raw) {
                Some(order) => config.prop_order = order,
                None => tracing::warn!(
                    key = ENV_PROP_ORDER,
                    value = %raw,
                    "unrecognized prop order, keeping default"
                ),
            }
        }
        config.trace_queries = lookup(ENV_TRACE_QUERIES).is_some();
        config
    }

    /// Set the attribute order (builder).
    #[must_use]
    pub fn with_prop_order(mut self, order: PropOrder) -> Self {
        self.prop_order = order;
        self
    }

    /// Enable or disable query logging (builder).
    #[must_use]
    pub fn with_trace_queries(mut self, enabled: bool) -> Self {
        self.trace_queries = enabled;
        self
    }
}
