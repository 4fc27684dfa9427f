#![forbid(unsafe_code)]

//! Element props in declaration order.

use crate::event::ChangeHandler;
use crate::node::format_number;

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// String value (`title="blah"`).
    Str(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value (`disabled`).
    Bool(bool),
    /// Change handler (`onChange`).
    Handler(ChangeHandler),
}

impl PropValue {
    /// Borrow the string payload, if this is a string prop.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload, if this is a number prop.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Handler payload, if this is a handler prop.
    #[must_use]
    pub fn as_handler(&self) -> Option<&ChangeHandler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// Attribute text for scalar values; `None` for handlers.
    #[must_use]
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Handler(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<ChangeHandler> for PropValue {
    fn from(value: ChangeHandler) -> Self {
        Self::Handler(value)
    }
}

/// Props of one element, kept in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    /// Create an empty prop map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop. Re-setting an existing name replaces it in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Props::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a prop by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    /// Look up a string prop by name.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_str)
    }

    /// True when a prop with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of props.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no props.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_declaration_order() {
        let props = Props::new().with("title", "blah").with("id", "x").with("a", 1);
        let names: Vec<_> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["title", "id", "a"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let props = Props::new()
            .with("value", "")
            .with("id", "username")
            .with("value", "glenjamin");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get_str("value"), Some("glenjamin"));
        assert_eq!(props.iter().next().map(|(k, _)| k), Some("value"));
    }

    #[test]
    fn typed_accessors() {
        let props: Props = [("n", PropValue::Number(3.0)), ("s", "x".into())]
            .into_iter()
            .collect();
        assert_eq!(props.get("n").and_then(PropValue::as_number), Some(3.0));
        assert_eq!(props.get_str("n"), None);
        assert_eq!(props.get_str("s"), Some("x"));
        assert!(!props.contains("missing"));
    }

    #[test]
    fn handlers_have_no_attribute_text() {
        let handler = PropValue::Handler(ChangeHandler::new(|_| {}));
        assert_eq!(handler.to_attr_string(), None);
        assert_eq!(PropValue::Number(2.5).to_attr_string().as_deref(), Some("2.5"));
    }
}
