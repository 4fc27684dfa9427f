#![forbid(unsafe_code)]

//! Rendered elements and their children.
//!
//! # Example
//!
//! ```
//! use shallow_core::{Child, Node};
//!
//! let node = Node::tag("div")
//!     .id("def")
//!     .child("DEF")
//!     .child(vec![Child::from(1), Child::Absent, Child::from("two")]);
//!
//! assert_eq!(node.tag_name(), Some("div"));
//! assert_eq!(node.flat_children().count(), 3);
//! ```

use smallvec::SmallVec;

use crate::component::ComponentRef;
use crate::event::{ChangeEvent, ChangeHandler};
use crate::props::{PropValue, Props};

/// Prop name under which a change handler is registered.
pub const ON_CHANGE: &str = "onChange";

/// The type of a rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    /// A primitive tag such as `div` or `input`.
    Tag(String),
    /// A component reference; opaque at this render depth.
    Component(ComponentRef),
}

/// Anything that may appear in an element's children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Child {
    /// Nothing (`null`, `false`, `None`). Skipped by traversal.
    #[default]
    Absent,
    /// A text leaf.
    Text(String),
    /// A numeric leaf. `0` is a real leaf and renders as `"0"`.
    Number(f64),
    /// A nested element.
    Element(Node),
    /// A nested sequence, expanded in place during traversal.
    List(Vec<Child>),
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Child {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Child {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Child {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Child {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Child {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

/// Booleans never render.
impl From<bool> for Child {
    fn from(_: bool) -> Self {
        Self::Absent
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Self::Element(value)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// A flattened, present child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'a> {
    Text(&'a str),
    Number(f64),
    Element(&'a Node),
}

/// Lazy depth-first flattening of nested child lists.
///
/// Lists are expanded in place, preserving order; absent children are
/// skipped. The stored tree is never normalized.
#[derive(Debug, Clone)]
pub struct FlatChildren<'a> {
    stack: SmallVec<[std::slice::Iter<'a, Child>; 4]>,
}

impl<'a> FlatChildren<'a> {
    /// Flatten the given children.
    #[must_use]
    pub fn new(children: &'a [Child]) -> Self {
        let mut stack = SmallVec::new();
        stack.push(children.iter());
        Self { stack }
    }
}

impl<'a> Iterator for FlatChildren<'a> {
    type Item = Leaf<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Child::Absent) => {}
                Some(Child::List(items)) => self.stack.push(items.iter()),
                Some(Child::Text(text)) => return Some(Leaf::Text(text)),
                Some(Child::Number(n)) => return Some(Leaf::Number(*n)),
                Some(Child::Element(node)) => return Some(Leaf::Element(node)),
            }
        }
    }
}

/// Format a number the way a browser prints it in text content.
///
/// Magnitudes below `1e-6` or from `1e21` up use exponent notation
/// (`1e+21`, `1.5e-7`); everything else is plain decimal.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let sci = format!("{n:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    format!("{n}")
}

/// One rendered element: type, optional key, props, children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    ty: ElementType,
    key: Option<String>,
    props: Props,
    children: Vec<Child>,
}

impl Node {
    /// Create a primitive tag element.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::with_type(ElementType::Tag(name.into()))
    }

    /// Create a component element.
    #[must_use]
    pub fn component(component: &ComponentRef) -> Self {
        Self::with_type(ElementType::Component(component.clone()))
    }

    /// Create an element of an explicit type.
    #[must_use]
    pub fn with_type(ty: ElementType) -> Self {
        Self {
            ty,
            key: None,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    // --- Builder methods ---

    /// Set a prop (builder).
    #[must_use]
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Replace all props (builder).
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set the `id` prop (builder).
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.prop("id", id.into())
    }

    /// Set the `className` prop (builder).
    #[must_use]
    pub fn class_name(self, class: impl Into<String>) -> Self {
        self.prop("className", class.into())
    }

    /// Set the reconciliation key (builder). Keys are not props.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Register a change handler under `onChange` (builder).
    #[must_use]
    pub fn on_change(self, f: impl Fn(&ChangeEvent) + 'static) -> Self {
        self.prop(ON_CHANGE, ChangeHandler::new(f))
    }

    /// Append one child (builder).
    #[must_use]
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children (builder).
    #[must_use]
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // --- Accessors ---

    /// The element type.
    #[must_use]
    pub fn element_type(&self) -> &ElementType {
        &self.ty
    }

    /// Tag name for primitive elements.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match &self.ty {
            ElementType::Tag(name) => Some(name),
            ElementType::Component(_) => None,
        }
    }

    /// Component reference for component elements.
    #[must_use]
    pub fn component_ref(&self) -> Option<&ComponentRef> {
        match &self.ty {
            ElementType::Component(c) => Some(c),
            ElementType::Tag(_) => None,
        }
    }

    /// True for component elements.
    #[must_use]
    pub fn is_component(&self) -> bool {
        matches!(self.ty, ElementType::Component(_))
    }

    /// Component display name, for component elements.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.component_ref().map(ComponentRef::display_name)
    }

    /// Reconciliation key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Element props.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Shorthand for `props().get(name)`.
    #[must_use]
    pub fn get_prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Registered change handler, if any.
    #[must_use]
    pub fn change_handler(&self) -> Option<&ChangeHandler> {
        self.props.get(ON_CHANGE).and_then(PropValue::as_handler)
    }

    /// Children exactly as declared.
    #[must_use]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Present children with nested lists expanded.
    #[must_use]
    pub fn flat_children(&self) -> FlatChildren<'_> {
        FlatChildren::new(&self.children)
    }

    /// The single text child, if the element has exactly one text-bearing
    /// leaf and nothing else.
    #[must_use]
    pub fn only_text(&self) -> Option<String> {
        let mut iter = self.flat_children();
        let text = match iter.next()? {
            Leaf::Text(s) => s.to_string(),
            Leaf::Number(n) => format_number(n),
            Leaf::Element(_) => return None,
        };
        iter.next().is_none().then_some(text)
    }
}
