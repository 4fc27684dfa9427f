//! Login Form Example
//!
//! Renders a stateful form one level deep, types into it, re-renders, and
//! prints what a test would assert on.
//!
//! Run: `cargo run -p shallow-harness --example login_form`

use std::cell::RefCell;
use std::rc::Rc;

use shallow_core::{Child, Component, ComponentRef, Context, Node, Props};
use shallow_harness::{Query, QueryError, shallow_render_with_context};

struct Avatar;

impl Component for Avatar {
    fn render(&self, _: &Props, _: &[Child], _: &Context) -> Node {
        Node::tag("img").prop("src", "/avatar.png")
    }
}

struct LoginForm {
    username: Rc<RefCell<String>>,
    avatar: ComponentRef,
}

impl Component for LoginForm {
    fn display_name(&self) -> Option<&str> {
        Some("LoginForm")
    }

    fn render(&self, _: &Props, _: &[Child], context: &Context) -> Node {
        let state = Rc::clone(&self.username);
        let username = self.username.borrow().clone();
        let greeting = (!username.is_empty()).then(|| format!("Hello, {username}"));
        Node::tag("form")
            .child(Node::tag("h2").child(context.get_str("title").unwrap_or("Sign in").to_string()))
            .child(Node::component(&self.avatar))
            .child(
                Node::tag("input")
                    .prop("type", "text")
                    .id("username")
                    .prop("value", username)
                    .on_change(move |event| *state.borrow_mut() = event.target.value.clone()),
            )
            .child(Node::tag("p").class_name("greeting").child(greeting))
    }
}

fn main() -> Result<(), QueryError> {
    let form = ComponentRef::new(LoginForm {
        username: Rc::new(RefCell::new(String::new())),
        avatar: ComponentRef::new(Avatar),
    });
    let mut session = shallow_render_with_context(
        Node::component(&form),
        Context::new().with("title", "Welcome back"),
    );

    println!("initial:  {session}");
    println!("text:     {}", session.text());

    session.fill_field("#username", "glenjamin")?;
    session.rerender();

    println!("after:    {session}");
    println!("greeting: {}", session.text_in(".greeting")?);
    println!("digest:   {}", session.digest());
    Ok(())
}
