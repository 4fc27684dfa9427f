#![forbid(unsafe_code)]

//! Harness: render sessions, sub-scopes, and test-run plumbing.
//!
//! # Role in Shallow
//! `shallow-harness` is what tests hold. A [`RenderSession`] renders a root
//! element or builder exactly one level deep, keeps the output, and exposes
//! the [`Query`] surface over it. [`SubTree`] exposes the same surface over
//! any node inside that output.
//!
//! # Primary responsibilities
//! - **Sessions**: initial render, explicit re-render, generation tracking.
//! - **Renderer boundary**: [`Renderer`] with the bundled [`ShallowRenderer`].
//! - **Configuration**: [`SessionConfig`] with environment overrides.
//! - **Digests**: blake3 content hashes of render output for snapshot tests.
//! - **Logging**: an optional env-filtered tracing subscriber (`tracing-json`).
//!
//! # How it fits in the system
//! Node values come from `shallow-core`; every query delegates to the pure
//! functions in `shallow-query`. The `shallow` facade re-exports this crate.

pub mod config;
pub mod digest;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod query;
pub mod render;
pub mod session;

pub use config::SessionConfig;
pub use digest::snapshot_digest;
#[cfg(feature = "tracing-json")]
pub use logging::init_tracing;
pub use query::{Query, SubTree};
pub use render::{Renderer, RootDescriptor, ShallowRenderer};
pub use session::{RenderSession, SessionBuilder, shallow_render, shallow_render_with_context};

pub use shallow_query::{FieldOutcome, PropOrder, QueryError, Result};
