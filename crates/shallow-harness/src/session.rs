#![forbid(unsafe_code)]

//! Render sessions.
//!
//! A session owns a root descriptor, the context it was rendered with, and
//! the most recent output. Queries read the output; nothing changes it until
//! [`RenderSession::rerender`] is called.
//!
//! # Example
//!
//! ```
//! use shallow_core::Node;
//! use shallow_harness::{Query, shallow_render};
//!
//! let session = shallow_render(Node::tag("h1").prop("title", "blah").child("Heading!"));
//! assert_eq!(session.to_string(), r#"<h1 title="blah">Heading!</h1>"#);
//! assert_eq!(session.text(), "Heading!");
//! ```

use std::fmt;

use shallow_core::{Context, Node};
use tracing::{debug, debug_span};

use crate::config::SessionConfig;
use crate::query::Query;
use crate::render::{Renderer, RootDescriptor, ShallowRenderer};

/// Render `root` once with an empty context.
pub fn shallow_render(root: impl Into<RootDescriptor>) -> RenderSession {
    RenderSession::builder(root).render()
}

/// Render `root` once with the given context.
pub fn shallow_render_with_context(
    root: impl Into<RootDescriptor>,
    context: Context,
) -> RenderSession {
    RenderSession::builder(root).context(context).render()
}

/// Configures and starts a [`RenderSession`].
#[derive(Debug)]
#[must_use]
pub struct SessionBuilder<R = ShallowRenderer> {
    root: RootDescriptor,
    context: Context,
    config: SessionConfig,
    renderer: R,
}

impl SessionBuilder<ShallowRenderer> {
    fn new(root: RootDescriptor) -> Self {
        Self {
            root,
            context: Context::new(),
            config: SessionConfig::from_env(),
            renderer: ShallowRenderer,
        }
    }
}

impl<R: Renderer> SessionBuilder<R> {
    /// Ambient values passed to the root component.
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Replace the environment-derived configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different rendering collaborator.
    pub fn renderer<R2: Renderer>(self, renderer: R2) -> SessionBuilder<R2> {
        SessionBuilder {
            root: self.root,
            context: self.context,
            config: self.config,
            renderer,
        }
    }

    /// Perform the initial render.
    pub fn render(self) -> RenderSession<R> {
        let Self {
            root,
            context,
            config,
            mut renderer,
        } = self;
        let output = render_once(&mut renderer, &root, &context, 1);
        RenderSession {
            renderer,
            root,
            context,
            config,
            output,
            generation: 1,
        }
    }
}

fn render_once<R: Renderer>(
    renderer: &mut R,
    root: &RootDescriptor,
    context: &Context,
    generation: u64,
) -> Node {
    let _span = debug_span!("shallow.render", generation).entered();
    let output = renderer.render(root, context);
    debug!(
        root = output.tag_name().or(output.display_name()).unwrap_or("?"),
        context_keys = context.len(),
        "rendered"
    );
    output
}

/// A rendered root plus everything needed to render it again.
#[derive(Debug)]
pub struct RenderSession<R = ShallowRenderer> {
    renderer: R,
    root: RootDescriptor,
    context: Context,
    config: SessionConfig,
    output: Node,
    generation: u64,
}

impl RenderSession {
    /// Start configuring a session for `root`.
    pub fn builder(root: impl Into<RootDescriptor>) -> SessionBuilder {
        SessionBuilder::new(root.into())
    }
}

impl<R: Renderer> RenderSession<R> {
    /// Render the root again with the same context and replace the output.
    ///
    /// Borrows from the previous output (including any [`SubTree`]) must be
    /// released first.
    ///
    /// [`SubTree`]: crate::SubTree
    pub fn rerender(&mut self) -> &Node {
        self.generation += 1;
        self.output = render_once(&mut self.renderer, &self.root, &self.context, self.generation);
        &self.output
    }

    /// Number of renders performed, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// What this session renders.
    #[must_use]
    pub fn root(&self) -> &RootDescriptor {
        &self.root
    }

    /// The rendering collaborator, for inspecting custom renderers.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R> Query for RenderSession<R> {
    fn get_render_output(&self) -> &Node {
        &self.output
    }

    fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl<R> fmt::Display for RenderSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
