#![forbid(unsafe_code)]

//! Stable content digests of render output.
//!
//! The digest covers the HTML form, so it tracks everything a reader can
//! see (types, attributes, text) and ignores handler identity.

use shallow_core::Node;
use shallow_query::{PropOrder, to_html};

/// Digest prefix for clarity in logs.
const DIGEST_PREFIX: &str = "blake3:";

/// `blake3:<hex>` digest of the node's HTML serialization.
#[must_use]
pub fn snapshot_digest(node: &Node, order: PropOrder) -> String {
    let html = to_html(node, order);
    let hash = blake3::hash(html.as_bytes());
    format!("{DIGEST_PREFIX}{}", hash.to_hex())
}
