#![forbid(unsafe_code)]

//! Opaque component references and the ambient render context.
//!
//! A [`ComponentRef`] is the `type` of a component element. It is compared
//! by identity, never by value, and carries the display name used by
//! `Name` selectors and by text placeholders (`<Widget />`).

use std::any::type_name;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::node::{Child, Node};
use crate::props::{PropValue, Props};

/// A user component that renders one level of output.
///
/// Stateful components keep their state behind interior mutability; change
/// handlers they emit close over that state, and the next render reads it.
pub trait Component: 'static {
    /// Display name used by selectors and placeholders.
    ///
    /// When `None`, the short type name of the implementor is used.
    fn display_name(&self) -> Option<&str> {
        None
    }

    /// Produce this component's output for the given props and children.
    fn render(&self, props: &Props, children: &[Child], context: &Context) -> Node;
}

struct ComponentInner {
    name: String,
    component: Box<dyn Component>,
}

/// Identity-compared handle to a component.
#[derive(Clone)]
pub struct ComponentRef(Rc<ComponentInner>);

impl ComponentRef {
    /// Register a component and resolve its display name.
    pub fn new<C: Component>(component: C) -> Self {
        let name = component
            .display_name()
            .map_or_else(|| short_type_name::<C>().to_string(), str::to_string);
        #[cfg(feature = "tracing")]
        tracing::trace!(component = %name, "component registered");
        Self(Rc::new(ComponentInner {
            name,
            component: Box::new(component),
        }))
    }

    /// The resolved display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.0.name
    }

    /// Render the component once.
    pub fn render(&self, props: &Props, children: &[Child], context: &Context) -> Node {
        self.0.component.render(props, children, context)
    }

    /// True when both handles refer to the same component.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.0.name).finish()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Ambient values handed to components while rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: BTreeMap<String, PropValue>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Look up a string value.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// True when the context holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
