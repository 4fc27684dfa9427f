#![forbid(unsafe_code)]

//! Depth-first, pre-order search over render output.

use shallow_core::{FlatChildren, Leaf, Node};

use crate::error::Result;
use crate::selector::Selector;

/// Pre-order iterator over a node and every element beneath it.
///
/// The root is yielded first, then each child subtree left to right.
/// Component elements are walked through the children they were given;
/// their own output is never rendered here.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    root: Option<&'a Node>,
    stack: Vec<FlatChildren<'a>>,
}

impl<'a> Descendants<'a> {
    /// Start a walk at `root`.
    #[must_use]
    pub fn new(root: &'a Node) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.flat_children());
            return Some(root);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(Leaf::Element(node)) => {
                    self.stack.push(node.flat_children());
                    return Some(node);
                }
                Some(Leaf::Text(_) | Leaf::Number(_)) => {}
            }
        }
    }
}

/// First node matching an already parsed selector.
#[must_use]
pub fn find_first<'a>(root: &'a Node, selector: &Selector) -> Option<&'a Node> {
    Descendants::new(root).find(|node| selector.matches(node))
}

/// First node in document order matching `selector`.
///
/// Returns `Ok(None)` when nothing matches; only a malformed selector is
/// an error.
pub fn find_node<'a>(root: &'a Node, selector: &str) -> Result<Option<&'a Node>> {
    let parsed = Selector::parse(selector)?;
    let found = find_first(root, &parsed);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        selector,
        kind = parsed.kind(),
        found = found.is_some(),
        "find_node"
    );
    Ok(found)
}

/// Every node matching `selector`, in document order.
pub fn find_all<'a>(root: &'a Node, selector: &str) -> Result<Vec<&'a Node>> {
    let parsed = Selector::parse(selector)?;
    let found: Vec<_> = Descendants::new(root)
        .filter(|node| parsed.matches(node))
        .collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(selector, count = found.len(), "find_all");
    Ok(found)
}
