#![forbid(unsafe_code)]

//! Synthetic change events and the handlers that receive them.

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

/// The element a change event is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    /// The new field value.
    pub value: String,
}

/// A synthesized "value changed" event, shaped like `{ target: { value } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: EventTarget,
}

impl ChangeEvent {
    /// Build an event whose target carries `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: EventTarget {
                value: value.into(),
            },
        }
    }
}

/// A registered change handler.
///
/// Handlers are shared, so cloning a tree clones the handle, not the
/// closure. Two handlers are equal only when they are the same allocation.
#[derive(Clone)]
pub struct ChangeHandler(Rc<dyn Fn(&ChangeEvent)>);

impl ChangeHandler {
    /// Wrap a closure as a change handler.
    pub fn new(f: impl Fn(&ChangeEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self, event: &ChangeEvent) {
        (self.0)(event);
    }
}

impl PartialEq for ChangeHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChangeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}
