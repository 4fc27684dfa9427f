#![forbid(unsafe_code)]

//! CSS-lite selectors.
//!
//! Exactly four atomic forms are recognized, and they do not compose:
//!
//! | Literal   | Form    | Matches when                                  |
//! |-----------|---------|-----------------------------------------------|
//! | `div`     | `Tag`   | the element's tag is `div`                    |
//! | `Widget`  | `Name`  | the element is a component named `Widget`     |
//! | `#abc`    | `Id`    | the `id` prop is the string `abc`             |
//! | `.abc`    | `Class` | `abc` is one of the `className` tokens        |
//!
//! A bare token is classified by its first character (JSX convention: an
//! upper-case letter names a component, anything else a tag), but matching tries the tag namespace first and
//! then the component display name, so a lower-case component name still
//! resolves. Anything else is a syntax fault, never a silent non-match.

use std::fmt;
use std::str::FromStr;

use shallow_core::{ElementType, Node};

use crate::error::{QueryError, Result};

/// A parsed, single-criterion selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Bare token not starting with an upper-case letter: primitive tag name.
    Tag(String),
    /// `#value`: `id` prop equality.
    Id(String),
    /// `.value`: membership in whitespace-split `className`.
    Class(String),
    /// Bare token starting with an upper-case letter: component display name.
    Name(String),
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn check_ident(input: &str, body: &str, prefix: &str) -> Result<()> {
    if body.is_empty() {
        return Err(QueryError::invalid(
            input,
            format!("expected a name after `{prefix}`"),
        ));
    }
    if let Some(bad) = body.chars().find(|c| !is_ident_char(*c)) {
        return Err(QueryError::invalid(
            input,
            format!("unexpected character `{bad}`"),
        ));
    }
    Ok(())
}

impl Selector {
    /// Parse a selector literal.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(QueryError::invalid(input, "empty selector"));
        }
        if let Some(body) = input.strip_prefix('#') {
            check_ident(input, body, "#")?;
            return Ok(Self::Id(body.to_string()));
        }
        if let Some(body) = input.strip_prefix('.') {
            check_ident(input, body, ".")?;
            return Ok(Self::Class(body.to_string()));
        }
        check_ident(input, input, "")?;
        if input.starts_with(|c: char| c.is_ascii_uppercase()) {
            Ok(Self::Name(input.to_string()))
        } else {
            Ok(Self::Tag(input.to_string()))
        }
    }

    /// Evaluate the selector against a single node.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Tag(token) | Self::Name(token) => matches_type_token(token, node),
            Self::Id(id) => node.props().get_str("id") == Some(id.as_str()),
            Self::Class(class) => node
                .props()
                .get_str("className")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class)),
        }
    }

    /// Short label of the selector form, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Tag(_) => "tag",
            Self::Id(_) => "id",
            Self::Class(_) => "class",
            Self::Name(_) => "name",
        }
    }
}

fn matches_type_token(token: &str, node: &Node) -> bool {
    match node.element_type() {
        ElementType::Tag(tag) => tag == token,
        ElementType::Component(component) => component.display_name() == token,
    }
}

impl FromStr for Selector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(v) | Self::Name(v) => f.write_str(v),
            Self::Id(v) => write!(f, "#{v}"),
            Self::Class(v) => write!(f, ".{v}"),
        }
    }
}

/// Parse `selector` and evaluate it against `node`.
pub fn matches(selector: &str, node: &Node) -> Result<bool> {
    Ok(Selector::parse(selector)?.matches(node))
}
