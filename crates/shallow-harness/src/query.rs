#![forbid(unsafe_code)]

//! The query surface shared by sessions and sub-scopes.
//!
//! Implementors supply a root node and a configuration; every query is a
//! provided method over that root. A [`SubTree`] borrows the session's render
//! output, so it cannot outlive a re-render of the owning session.

use std::fmt;

use shallow_core::Node;
use shallow_query::{FieldOutcome, Result, field, text, to_html, walk};

use crate::config::SessionConfig;
use crate::digest::snapshot_digest;

fn log_query(config: &SessionConfig, op: &'static str, selector: &str) {
    if config.trace_queries {
        tracing::info!(op, selector, "query");
    } else {
        tracing::trace!(op, selector, "query");
    }
}

/// Read-mostly operations over a scope's current render output.
pub trait Query {
    /// Root node of this scope.
    fn get_render_output(&self) -> &Node;

    /// Configuration inherited by this scope.
    fn config(&self) -> &SessionConfig;

    /// First node in pre-order matching `selector`, the root included.
    ///
    /// A malformed selector is an error; no match is `Ok(None)`.
    fn find_node(&self, selector: &str) -> Result<Option<&Node>> {
        log_query(self.config(), "find_node", selector);
        walk::find_node(self.get_render_output(), selector)
    }

    /// Every node matching `selector`, in pre-order.
    fn find_all(&self, selector: &str) -> Result<Vec<&Node>> {
        log_query(self.config(), "find_all", selector);
        walk::find_all(self.get_render_output(), selector)
    }

    /// Text of the first node matching `selector`.
    fn text_in(&self, selector: &str) -> Result<String> {
        log_query(self.config(), "text_in", selector);
        text::text_in(self.get_render_output(), selector)
    }

    /// Readable text of the whole scope.
    fn text(&self) -> String {
        text::text(self.get_render_output())
    }

    /// Simulate typing `value` into the first node matching `selector`.
    ///
    /// The tree is not re-rendered; call
    /// [`RenderSession::rerender`](crate::RenderSession::rerender) to observe
    /// any state the handler changed.
    fn fill_field(&self, selector: &str, value: &str) -> Result<FieldOutcome> {
        log_query(self.config(), "fill_field", selector);
        field::fill_field(self.get_render_output(), selector, value)
    }

    /// Scope rooted at the first node matching `selector`.
    fn sub_tree(&self, selector: &str) -> Result<Option<SubTree<'_>>> {
        log_query(self.config(), "sub_tree", selector);
        let config = self.config();
        Ok(self
            .find_node(selector)?
            .map(|root| SubTree::new(root, config)))
    }

    /// HTML-like serialization of the scope.
    fn to_html(&self) -> String {
        to_html(self.get_render_output(), self.config().prop_order)
    }

    /// Content digest of the scope's HTML form.
    fn digest(&self) -> String {
        snapshot_digest(self.get_render_output(), self.config().prop_order)
    }
}

/// A query scope rooted at a node inside some render output.
///
/// Offers every [`Query`] operation of the session it came from. It has no
/// `rerender`, `generation` or `context`: a sub-tree borrows the session's
/// output, so the session cannot re-render while it is alive. Take a new
/// sub-tree after re-rendering.
///
/// The inherent lookups return borrows of the underlying output (`'a`), so
/// nested scopes and found nodes outlive the `SubTree` value they came from.
#[derive(Debug, Clone, Copy)]
pub struct SubTree<'a> {
    root: &'a Node,
    config: &'a SessionConfig,
}

impl<'a> SubTree<'a> {
    #[must_use]
    pub fn new(root: &'a Node, config: &'a SessionConfig) -> Self {
        Self { root, config }
    }

    /// The scope root with the full borrow lifetime.
    #[must_use]
    pub fn node(&self) -> &'a Node {
        self.root
    }

    /// [`Query::find_node`] borrowing from the output rather than `self`.
    pub fn find_node(&self, selector: &str) -> Result<Option<&'a Node>> {
        log_query(self.config, "find_node", selector);
        walk::find_node(self.root, selector)
    }

    /// [`Query::find_all`] borrowing from the output rather than `self`.
    pub fn find_all(&self, selector: &str) -> Result<Vec<&'a Node>> {
        log_query(self.config, "find_all", selector);
        walk::find_all(self.root, selector)
    }

    /// [`Query::sub_tree`] borrowing from the output rather than `self`.
    pub fn sub_tree(&self, selector: &str) -> Result<Option<SubTree<'a>>> {
        log_query(self.config, "sub_tree", selector);
        let config = self.config;
        Ok(walk::find_node(self.root, selector)?.map(|root| SubTree::new(root, config)))
    }
}

impl Query for SubTree<'_> {
    fn get_render_output(&self) -> &Node {
        self.root
    }

    fn config(&self) -> &SessionConfig {
        self.config
    }
}

impl fmt::Display for SubTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
