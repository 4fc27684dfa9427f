#![forbid(unsafe_code)]

use thiserror::Error;

/// Failures raised by selector-taking operations.
///
/// Absence is not an error for `find_node` / `sub_tree`; those return
/// `Ok(None)`. Everything here is deterministic for a given tree and
/// selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The selector literal is not one of the four supported forms.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    /// `text_in` found nothing to read.
    #[error("no node matches selector `{selector}`")]
    NoMatch { selector: String },
    /// `fill_field` found nothing to fill.
    #[error("unknown field: no node matches selector `{selector}`")]
    UnknownField { selector: String },
}

impl QueryError {
    pub(crate) fn invalid(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }

    /// True for selector syntax faults.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. })
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
