#![forbid(unsafe_code)]

//! Core: the render-output node model for shallow rendering.
//!
//! # Role in Shallow
//! `shallow-core` is the data layer. It describes one level of rendered
//! output: elements with a tag or component type, ordered props, and
//! children that may be text, numbers, nested elements, or nested lists.
//!
//! # Primary responsibilities
//! - **Node**: one rendered element (type, key, props, children).
//! - **Child**: the closed union of everything that can appear as a child.
//! - **Props / PropValue**: declaration-ordered props, including change handlers.
//! - **Component / ComponentRef**: opaque, identity-compared component handles.
//! - **Flattening**: lazy, order-preserving expansion of nested child lists.
//!
//! # How it fits in the system
//! `shallow-query` walks and serializes these values; `shallow-harness` owns
//! a session that asks a renderer for a fresh `Node` on every render. Output
//! is a value: nothing here renders a component more than once or mutates a
//! tree after it was built.

pub mod component;
pub mod event;
pub mod node;
pub mod props;

pub use component::{Component, ComponentRef, Context};
pub use event::{ChangeEvent, ChangeHandler, EventTarget};
pub use node::{Child, ElementType, FlatChildren, Leaf, Node, ON_CHANGE, format_number};
pub use props::{PropValue, Props};
