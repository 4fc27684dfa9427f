#![forbid(unsafe_code)]

//! Minimal HTML-like serialization for diagnostics.

use shallow_core::{ElementType, Leaf, Node, PropValue, Props, format_number};

/// Attribute ordering for [`to_html`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropOrder {
    /// Props in the order they were declared (default).
    #[default]
    Declared,
    /// Props sorted by attribute name.
    Sorted,
}

impl PropOrder {
    /// Parse `declared` / `sorted` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "declared" => Some(Self::Declared),
            "sorted" => Some(Self::Sorted),
            _ => None,
        }
    }
}

const VOID_TAGS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Props that never appear as attributes.
const RESERVED_PROPS: [&str; 1] = ["ref"];

fn attr_name(prop: &str) -> &str {
    match prop {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

fn escape_into(out: &mut String, s: &str, quote: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn write_attrs(out: &mut String, props: &Props, order: PropOrder) {
    let mut attrs: Vec<(&str, &PropValue)> = props
        .iter()
        .filter(|(name, value)| {
            !RESERVED_PROPS.contains(name)
                && !matches!(value, PropValue::Handler(_) | PropValue::Bool(false))
        })
        .map(|(name, value)| (attr_name(name), value))
        .collect();
    if order == PropOrder::Sorted {
        attrs.sort_by(|a, b| a.0.cmp(b.0));
    }
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        if matches!(value, PropValue::Bool(true)) {
            continue;
        }
        if let Some(text) = value.to_attr_string() {
            out.push_str("=\"");
            escape_into(out, &text, true);
            out.push('"');
        }
    }
}

fn write_node(out: &mut String, node: &Node, order: PropOrder) {
    match node.element_type() {
        ElementType::Component(component) => {
            out.push('<');
            out.push_str(component.display_name());
            write_attrs(out, node.props(), order);
            out.push_str("/>");
        }
        ElementType::Tag(tag) => {
            out.push('<');
            out.push_str(tag);
            write_attrs(out, node.props(), order);
            let mut children = node.flat_children().peekable();
            if children.peek().is_none() && VOID_TAGS.contains(&tag.as_str()) {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for leaf in children {
                match leaf {
                    Leaf::Text(s) => escape_into(out, s, false),
                    Leaf::Number(n) => out.push_str(&format_number(n)),
                    Leaf::Element(child) => write_node(out, child, order),
                }
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

/// Serialize `node` and its children as HTML-like markup.
#[must_use]
pub fn to_html(node: &Node, order: PropOrder) -> String {
    let mut out = String::new();
    write_node(&mut out, node, order);
    out
}
