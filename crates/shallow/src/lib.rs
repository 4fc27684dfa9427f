#![forbid(unsafe_code)]

//! Shallow public facade crate.
//!
//! Re-exports the node model, the query functions, and the render session
//! so tests can depend on a single crate, plus a prelude for the common
//! case:
//!
//! ```
//! use shallow::prelude::*;
//!
//! let session = shallow_render(Node::tag("h1").prop("title", "blah").child("Heading!"));
//! assert_eq!(session.find_node("h1")?.map(Node::tag_name), Some(Some("h1")));
//! assert_eq!(session.to_string(), r#"<h1 title="blah">Heading!</h1>"#);
//! # Ok::<(), shallow::QueryError>(())
//! ```

// --- Node model -------------------------------------------------------------

pub use shallow_core::{
    ChangeEvent, ChangeHandler, Child, Component, ComponentRef, Context, ElementType, EventTarget,
    Leaf, Node, PropValue, Props,
};

// --- Queries ----------------------------------------------------------------

pub use shallow_query::{FieldOutcome, PropOrder, QueryError, Result, Selector};

// --- Sessions ---------------------------------------------------------------

pub use shallow_harness::{
    Query, RenderSession, Renderer, RootDescriptor, SessionBuilder, SessionConfig,
    ShallowRenderer, SubTree, shallow_render, shallow_render_with_context, snapshot_digest,
};

#[cfg(feature = "tracing-json")]
pub use shallow_harness::init_tracing;

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Child, Component, ComponentRef, Context, FieldOutcome, Node, Props, Query, QueryError,
        RenderSession, RootDescriptor, SessionConfig, SubTree, shallow_render,
        shallow_render_with_context,
    };

    pub use crate::{core, harness, query};
}

pub use shallow_core as core;
pub use shallow_harness as harness;
pub use shallow_query as query;
