#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shallow_core::{Child, Node};
use shallow_query::{PropOrder, find_all, find_node, text, to_html};

#[derive(Debug, Arbitrary)]
enum FuzzChild {
    Text(String),
    Number(f64),
    Absent,
    Element(FuzzNode),
    List(Vec<FuzzChild>),
}

#[derive(Debug, Arbitrary)]
struct FuzzNode {
    tag: u8,
    id: Option<String>,
    class: Option<String>,
    children: Vec<FuzzChild>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    root: FuzzNode,
    selector: String,
}

const TAGS: [&str; 5] = ["div", "p", "span", "input", "hr"];

fn child(c: FuzzChild, depth: usize) -> Child {
    match c {
        FuzzChild::Text(s) => Child::from(s),
        FuzzChild::Number(n) => Child::Number(n),
        FuzzChild::Absent => Child::Absent,
        FuzzChild::Element(n) if depth < 16 => Child::from(node(n, depth + 1)),
        FuzzChild::List(items) if depth < 16 => {
            Child::List(items.into_iter().map(|c| child(c, depth + 1)).collect())
        }
        _ => Child::Absent,
    }
}

fn node(n: FuzzNode, depth: usize) -> Node {
    let mut out = Node::tag(TAGS[usize::from(n.tag) % TAGS.len()]);
    if let Some(id) = n.id {
        out = out.id(id);
    }
    if let Some(class) = n.class {
        out = out.class_name(class);
    }
    out.with_children(n.children.into_iter().map(|c| child(c, depth)))
}

fuzz_target!(|input: Input| {
    let root = node(input.root, 0);

    // Serializers must never panic on arbitrary content.
    let _text = text(&root);
    let declared = to_html(&root, PropOrder::Declared);
    assert!(declared.starts_with('<'));

    // Lookup agrees with itself: find_node is the head of find_all.
    if let (Ok(first), Ok(all)) = (find_node(&root, &input.selector), find_all(&root, &input.selector)) {
        assert_eq!(first.map(|n| n as *const Node), all.first().map(|n| *n as *const Node));
    }
});
