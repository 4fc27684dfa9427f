#![forbid(unsafe_code)]

//! Query: selectors, tree walking, and serialization over render output.
//!
//! Everything here is a pure function of a [`shallow_core::Node`] snapshot:
//! matching, walking and serializing never mutate the tree, and field
//! interaction only calls handlers the tree already carries.

pub mod error;
pub mod field;
pub mod html;
pub mod selector;
pub mod text;
pub mod walk;

pub use error::{QueryError, Result};
pub use field::{FieldOutcome, fill_field};
pub use html::{PropOrder, to_html};
pub use selector::{Selector, matches};
pub use text::{placeholder, text, text_in};
pub use walk::{Descendants, find_all, find_first, find_node};
