#![forbid(unsafe_code)]

//! Human-readable text content of render output.
//!
//! Text and number leaves become tokens; component elements become a
//! `<DisplayName />` placeholder and are not descended into. Text tokens
//! are trimmed, blank ones dropped, and the rest joined with a single space.

use std::borrow::Cow;

use shallow_core::{ComponentRef, FlatChildren, Leaf, Node, format_number};

use crate::error::{QueryError, Result};
use crate::walk::find_node;

/// Placeholder token for an opaque component element.
#[must_use]
pub fn placeholder(component: &ComponentRef) -> String {
    format!("<{} />", component.display_name())
}

/// Linearize the text content of `root`.
#[must_use]
pub fn text(root: &Node) -> String {
    let mut tokens: Vec<Cow<'_, str>> = Vec::new();
    if let Some(component) = root.component_ref() {
        return placeholder(component);
    }
    let mut stack: Vec<FlatChildren<'_>> = vec![root.flat_children()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            None => {
                stack.pop();
            }
            Some(Leaf::Text(s)) => {
                let s = s.trim();
                if !s.is_empty() {
                    tokens.push(Cow::Borrowed(s));
                }
            }
            Some(Leaf::Number(n)) => tokens.push(Cow::Owned(format_number(n))),
            Some(Leaf::Element(node)) => match node.component_ref() {
                Some(component) => tokens.push(Cow::Owned(placeholder(component))),
                None => stack.push(node.flat_children()),
            },
        }
    }
    tokens.join(" ")
}

/// Text content of the first node matching `selector`.
///
/// Unlike `find_node`, a selector that matches nothing is an error here, so
/// a typo cannot hide behind an empty string.
pub fn text_in(root: &Node, selector: &str) -> Result<String> {
    let node = find_node(root, selector)?.ok_or_else(|| QueryError::NoMatch {
        selector: selector.to_string(),
    })?;
    Ok(text(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shallow_core::{Child, Component, Context, Props};

    struct Widget;

    impl Component for Widget {
        fn display_name(&self) -> Option<&str> {
            Some("Widget")
        }

        fn render(&self, _: &Props, _: &[Child], _: &Context) -> Node {
            Node::tag("p").child("Should not see")
        }
    }

    #[test]
    fn linearizes_mixed_children() {
        let widget = shallow_core::ComponentRef::new(Widget);
        let tree = Node::tag("h1").prop("title", "blah").child("Heading!").child(
            Node::tag("div")
                .prop("title", "blah")
                .child(123)
                .child(Node::tag("hr"))
                .child("Some text.")
                .child("More text.")
                .child(vec![
                    Node::component(&widget).with_key("1"),
                    Node::component(&widget).with_key("2"),
                ]),
        );
        assert_eq!(
            text(&tree),
            "Heading! 123 Some text. More text. <Widget /> <Widget />"
        );
    }

    #[test]
    fn single_zero_child() {
        assert_eq!(text(&Node::tag("h1").child(0)), "0");
    }

    #[test]
    fn void_and_empty_children_add_no_whitespace() {
        let tree = Node::tag("p").with_children([
            Child::from(""),
            Child::from("a"),
            Child::Absent,
            Child::from(Node::tag("br")),
            Child::from("  "),
            Child::from("b"),
        ]);
        assert_eq!(text(&tree), "a b");
        assert_eq!(text(&Node::tag("hr")), "");
    }

    #[test]
    fn component_root_is_a_placeholder() {
        let widget = shallow_core::ComponentRef::new(Widget);
        let tree = Node::component(&widget).child("ignored");
        assert_eq!(text(&tree), "<Widget />");
    }

    #[test]
    fn text_in_scopes_to_the_match() {
        let tree = Node::tag("div")
            .child(Node::tag("div").class_name("abc").child("ABC"))
            .child(Node::tag("div").id("def").child("DEF"))
            .child(Node::tag("object").child("objection!"));
        assert_eq!(text_in(&tree, ".abc").unwrap(), "ABC");
        assert_eq!(text_in(&tree, "#def").unwrap(), "DEF");
        assert_eq!(text_in(&tree, "object").unwrap(), "objection!");
    }

    #[test]
    fn text_in_without_match_is_an_error() {
        let tree = Node::tag("div");
        assert_eq!(
            text_in(&tree, "#nope"),
            Err(QueryError::NoMatch {
                selector: "#nope".into()
            })
        );
        assert!(text_in(&tree, ";").unwrap_err().is_syntax());
    }

    #[test]
    fn extreme_numbers_print_like_a_browser() {
        let tree = Node::tag("p").child(1e21).child(1e-7);
        assert_eq!(text(&tree), "1e+21 1e-7");
    }
}
