#![forbid(unsafe_code)]

//! The rendering collaborator boundary.
//!
//! A [`Renderer`] turns a root descriptor plus ambient context into one
//! level of output. [`ShallowRenderer`] is the bundled implementation: it
//! resolves the descriptor to an element and, when that element is a
//! component, renders it exactly once. Nested components stay opaque.

use std::fmt;
use std::rc::Rc;

use shallow_core::{Context, Node};

/// What a session renders: a ready element or a zero-argument builder.
#[derive(Clone)]
pub enum RootDescriptor {
    /// A pre-built element.
    Element(Node),
    /// A closure producing the element on every render.
    Builder(Rc<dyn Fn() -> Node>),
}

impl RootDescriptor {
    /// Wrap a builder closure.
    pub fn builder(f: impl Fn() -> Node + 'static) -> Self {
        Self::Builder(Rc::new(f))
    }

    /// Produce the root element.
    #[must_use]
    pub fn resolve(&self) -> Node {
        match self {
            Self::Element(node) => node.clone(),
            Self::Builder(build) => build(),
        }
    }
}

impl From<Node> for RootDescriptor {
    fn from(node: Node) -> Self {
        Self::Element(node)
    }
}

impl fmt::Debug for RootDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(node) => f.debug_tuple("Element").field(node).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// Produces one level of render output.
///
/// Implementations must be idempotent for the same component state.
pub trait Renderer {
    fn render(&mut self, root: &RootDescriptor, context: &Context) -> Node;
}

impl<F> Renderer for F
where
    F: FnMut(&RootDescriptor, &Context) -> Node,
{
    fn render(&mut self, root: &RootDescriptor, context: &Context) -> Node {
        self(root, context)
    }
}

/// One-level renderer: expands the root component once, nothing deeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowRenderer;

impl Renderer for ShallowRenderer {
    fn render(&mut self, root: &RootDescriptor, context: &Context) -> Node {
        let element = root.resolve();
        match element.component_ref() {
            Some(component) => component.render(element.props(), element.children(), context),
            None => element,
        }
    }
}
