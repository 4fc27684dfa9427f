#![forbid(unsafe_code)]

//! Field interaction: simulated value changes.
//!
//! The tree is never written to. A value change only becomes visible when
//! the owning component's handler updates its state and the caller renders
//! again (a "controlled" field). Fields without a handler ignore the event.

use shallow_core::{ChangeEvent, Node};

use crate::error::{QueryError, Result};
use crate::walk::find_node;

/// What happened to a simulated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// A registered handler received the event.
    Dispatched,
    /// The field has no handler; nothing happened.
    NoHandler,
}

/// Simulate typing `value` into the first field matching `selector`.
///
/// The field must exist: a selector that matches nothing is
/// [`QueryError::UnknownField`].
pub fn fill_field(root: &Node, selector: &str, value: &str) -> Result<FieldOutcome> {
    let field = find_node(root, selector)?.ok_or_else(|| QueryError::UnknownField {
        selector: selector.to_string(),
    })?;
    let Some(handler) = field.change_handler() else {
        #[cfg(feature = "tracing")]
        tracing::trace!(selector, "fill_field: no change handler");
        return Ok(FieldOutcome::NoHandler);
    };
    handler.call(&ChangeEvent::new(value));
    #[cfg(feature = "tracing")]
    tracing::trace!(selector, value, "fill_field: change dispatched");
    Ok(FieldOutcome::Dispatched)
}
