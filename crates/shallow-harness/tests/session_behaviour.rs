#![forbid(unsafe_code)]

//! End-to-end behaviour of render sessions and sub-scopes.
//!
//! Covers:
//! - Rendering elements, components, and builders (with and without context)
//! - Lookup by class, id, tag, and component name
//! - Text extraction and HTML serialization
//! - Field interaction followed by an explicit re-render
//! - Scoped queries through sub-trees

use std::cell::RefCell;
use std::rc::Rc;

use shallow_core::{Child, Component, ComponentRef, Context, Node, Props};
use shallow_harness::{
    FieldOutcome, Query, QueryError, RenderSession, RootDescriptor, SessionConfig, SubTree,
    shallow_render, shallow_render_with_context,
};
use tracing::{Level, info};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::INFO)
        .try_init();
}

fn assert_heading(out: &Node) {
    assert_eq!(out.tag_name(), Some("h1"));
    assert_eq!(out.props().get_str("title"), Some("blah"));
    assert_eq!(out.children(), [Child::from("Heading!")]);
}

fn heading() -> Node {
    Node::tag("h1").prop("title", "blah").child("Heading!")
}

struct Heading;

impl Component for Heading {
    fn render(&self, _: &Props, _: &[Child], _: &Context) -> Node {
        heading()
    }
}

struct ContextHeading;

impl Component for ContextHeading {
    fn render(&self, _: &Props, _: &[Child], context: &Context) -> Node {
        Node::tag("h1")
            .prop("title", "blah")
            .child(context.get_str("title").map(str::to_string))
    }
}

struct Widget;

impl Component for Widget {
    fn display_name(&self) -> Option<&str> {
        Some("Widget")
    }

    fn render(&self, _: &Props, _: &[Child], _: &Context) -> Node {
        Node::tag("span").child("Should not see")
    }
}

struct LoginForm {
    username: Rc<RefCell<String>>,
}

impl Component for LoginForm {
    fn render(&self, _: &Props, _: &[Child], _: &Context) -> Node {
        let state = Rc::clone(&self.username);
        let value = self.username.borrow().clone();
        Node::tag("form")
            .child(
                Node::tag("input")
                    .prop("type", "text")
                    .id("username")
                    .prop("value", value)
                    .on_change(move |event| *state.borrow_mut() = event.target.value.clone()),
            )
            .child(
                Node::tag("input")
                    .prop("type", "text")
                    .prop("ref", "nickname")
                    .class_name("nickname"),
            )
    }
}

fn login_session() -> RenderSession {
    let form = ComponentRef::new(LoginForm {
        username: Rc::new(RefCell::new(String::new())),
    });
    shallow_render(Node::component(&form))
}

fn find_tree(widget: &ComponentRef) -> RenderSession {
    shallow_render(
        Node::tag("div")
            .child(Node::tag("div").child("objection!"))
            .child(Node::tag("div").id("def").child("DEF"))
            .child(
                Node::tag("div")
                    .child(Node::tag("div").child("objection!"))
                    .child(Node::tag("object").child("objection!"))
                    .child("hello")
                    .child(vec![Node::tag("div").class_name("abc").with_key("1").child("ABC")])
                    .child(Node::component(widget)),
            ),
    )
}

fn scoped_tree() -> RenderSession {
    shallow_render(
        Node::tag("div")
            .child(
                Node::tag("div")
                    .id("def")
                    .class_name("abc")
                    .child("DEF")
                    .child(Node::tag("hr")),
            )
            .child(
                Node::tag("div")
                    .id("abc")
                    .child(Node::tag("div").child("objection!"))
                    .child(Node::tag("object").child("objection!"))
                    .child("hello")
                    .child(vec![
                        Node::tag("div")
                            .id("abc2")
                            .class_name("abc")
                            .with_key("1")
                            .child("ABC"),
                    ]),
            ),
    )
}

// --- rendering ---

#[test]
fn renders_a_plain_element() {
    init_tracing();
    let session = shallow_render(heading());
    assert_heading(session.get_render_output());
    assert_eq!(session.generation(), 1);
}

#[test]
fn renders_a_component_one_level_deep() {
    let component = ComponentRef::new(Heading);
    let session = shallow_render(Node::component(&component));
    assert_heading(session.get_render_output());
}

#[test]
fn renders_a_builder_returning_an_element() {
    let session = shallow_render(RootDescriptor::builder(heading));
    assert_heading(session.get_render_output());
}

#[test]
fn renders_a_builder_returning_a_component() {
    let component = ComponentRef::new(Heading);
    let session = shallow_render(RootDescriptor::builder(move || Node::component(&component)));
    assert_heading(session.get_render_output());
}

#[test]
fn passes_context_to_the_root_component() {
    let component = ComponentRef::new(ContextHeading);
    let session = shallow_render_with_context(
        RootDescriptor::builder(move || Node::component(&component)),
        Context::new().with("title", "Heading!"),
    );
    assert_heading(session.get_render_output());
}

// --- find_node ---

#[test]
fn finds_by_class_id_and_tag() {
    let widget = ComponentRef::new(Widget);
    let session = find_tree(&widget);

    let abc = session.find_node(".abc").unwrap().unwrap();
    assert_eq!(abc.tag_name(), Some("div"));
    assert_eq!(abc.children(), [Child::from("ABC")]);

    let def = session.find_node("#def").unwrap().unwrap();
    assert_eq!(def.tag_name(), Some("div"));
    assert_eq!(def.children(), [Child::from("DEF")]);

    let object = session.find_node("object").unwrap().unwrap();
    assert_eq!(object.tag_name(), Some("object"));
    assert_eq!(object.children(), [Child::from("objection!")]);
}

#[test]
fn finds_components_by_display_name() {
    let widget = ComponentRef::new(Widget);
    let session = find_tree(&widget);
    let found = session.find_node("Widget").unwrap().unwrap();
    assert_eq!(found.component_ref(), Some(&widget));
}

#[test]
fn missing_nodes_are_none() {
    let widget = ComponentRef::new(Widget);
    let session = find_tree(&widget);
    assert_eq!(session.find_node(".def").unwrap(), None);
    assert_eq!(session.find_node("#abc").unwrap(), None);
}

#[test]
fn invalid_selectors_are_reported() {
    let widget = ComponentRef::new(Widget);
    let session = find_tree(&widget);
    let err = session.find_node(";huh?").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().to_lowercase().contains("invalid"));
}

#[test]
fn find_all_returns_every_match_in_order() {
    let widget = ComponentRef::new(Widget);
    let session = find_tree(&widget);
    let texts: Vec<String> = session
        .find_all("div")
        .unwrap()
        .into_iter()
        .map(shallow_query::text)
        .collect();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[1], "objection!");
    assert_eq!(texts[5], "ABC");
}

// --- text_in / text / to_html ---

#[test]
fn text_in_reads_the_first_match() {
    let session = shallow_render(
        Node::tag("div")
            .child(Node::tag("div").class_name("abc").child("ABC"))
            .child(Node::tag("div").id("def").child("DEF"))
            .child(Node::tag("object").child("objection!")),
    );
    assert_eq!(session.text_in(".abc").unwrap(), "ABC");
    assert_eq!(session.text_in("#def").unwrap(), "DEF");
    assert_eq!(session.text_in("object").unwrap(), "objection!");
    assert!(matches!(
        session.text_in(".missing"),
        Err(QueryError::NoMatch { .. })
    ));
}

#[test]
fn display_gives_html() {
    let session = shallow_render(heading());
    assert_eq!(session.to_string(), r#"<h1 title="blah">Heading!</h1>"#);
}

#[test]
fn text_flattens_and_names_nested_components() {
    let widget = ComponentRef::new(Widget);
    let session = shallow_render(
        Node::tag("h1").prop("title", "blah").child("Heading!").child(
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
        ),
    );
    assert_eq!(
        session.text(),
        "Heading! 123 Some text. More text. <Widget /> <Widget />"
    );
}

#[test]
fn a_single_zero_child_is_text() {
    let session = shallow_render(Node::tag("h1").child(0));
    assert_eq!(session.text(), "0");
}

// --- fill_field ---

#[test]
fn fill_field_updates_a_controlled_field_after_rerender() {
    init_tracing();
    let mut session = login_session();
    let value = |s: &RenderSession| {
        s.find_node("#username")
            .unwrap()
            .and_then(|node| node.props().get_str("value"))
            .map(str::to_string)
    };
    assert_eq!(value(&session).as_deref(), Some(""));

    let outcome = session.fill_field("#username", "glenjamin").unwrap();
    assert_eq!(outcome, FieldOutcome::Dispatched);
    assert_eq!(value(&session).as_deref(), Some(""));

    session.rerender();
    info!(generation = session.generation(), "re-rendered after fill");
    assert_eq!(value(&session).as_deref(), Some("glenjamin"));
    assert_eq!(session.generation(), 2);
}

#[test]
fn fill_field_without_handler_is_a_no_op() {
    let mut session = login_session();
    let before = session.find_node(".nickname").unwrap().unwrap().clone();

    let outcome = session.fill_field(".nickname", "glenjamin").unwrap();
    assert_eq!(outcome, FieldOutcome::NoHandler);
    assert_eq!(session.find_node(".nickname").unwrap(), Some(&before));

    session.rerender();
    assert_eq!(
        session.find_node(".nickname").unwrap().map(Node::props),
        Some(before.props())
    );
}

#[test]
fn fill_field_on_missing_node_is_unknown() {
    let session = login_session();
    let err = session.fill_field("#losername", "not-glenjamin").unwrap_err();
    assert!(matches!(err, QueryError::UnknownField { .. }));
    assert!(err.to_string().to_lowercase().contains("unknown"));
}

#[test]
fn reserved_props_are_not_serialized() {
    let session = login_session();
    assert_eq!(
        session.to_string(),
        r#"<form><input type="text" id="username" value=""/><input type="text" class="nickname"/></form>"#
    );
}

// --- sub_tree ---

#[test]
fn sub_tree_by_id_class_and_tag() {
    let session = scoped_tree();

    let by_id = session.sub_tree("#abc").unwrap().unwrap();
    assert_eq!(by_id.get_render_output().props().get_str("id"), Some("abc"));

    let by_class = session.sub_tree(".abc").unwrap().unwrap();
    assert_eq!(
        by_class.get_render_output().props().get_str("className"),
        Some("abc")
    );

    let by_tag = session.sub_tree("object").unwrap().unwrap();
    assert_eq!(
        by_tag.get_render_output().children(),
        [Child::from("objection!")]
    );
}

fn exercise<Q: Query>(scope: &Q) -> String {
    scope.text()
}

#[test]
fn sub_tree_offers_the_same_queries() {
    let session = scoped_tree();
    let sub: SubTree<'_> = session.sub_tree("#abc").unwrap().unwrap();
    assert_eq!(exercise(&session), "DEF objection! objection! hello ABC");
    assert_eq!(exercise(&sub), "objection! objection! hello ABC");
}

#[test]
fn scoped_find_node_text_in_and_text() {
    let session = scoped_tree();
    let sub = session.sub_tree("#abc").unwrap().unwrap();

    let scoped = sub.find_node(".abc").unwrap().unwrap();
    let global = session.find_node("#abc2").unwrap().unwrap();
    assert!(std::ptr::eq(scoped, global));

    assert_eq!(sub.text_in(".abc").unwrap(), "ABC");
    assert_eq!(sub.text(), "objection! objection! hello ABC");
    assert!(sub.sub_tree("#def").unwrap().is_none());
}

#[test]
fn sub_tree_inherits_config() {
    let session = RenderSession::builder(
        Node::tag("div").child(Node::tag("a").prop("title", "t").id("x")),
    )
    .config(SessionConfig::new().with_prop_order(shallow_harness::PropOrder::Sorted))
    .render();
    let link = session.sub_tree("a").unwrap().unwrap();
    assert_eq!(link.to_string(), r#"<a id="x" title="t"></a>"#);
    assert_eq!(link.config(), session.config());
}
