//! Indented structure dump for inspection and golden tests.

use crate::dom::Document;

/// Renders the tree as one line per element, `TAG:name` indented two
/// spaces per level, with the node's text on a `TEXT:` line one level
/// deeper. The synthetic root is skipped; it holds no tag and no text.
pub fn outline_lines(doc: &Document) -> Vec<String> {
    let mut out = Vec::new();
    for id in doc.pre_order().into_iter().skip(1) {
        let node = doc.node(id);
        let indent = "  ".repeat((node.depth - 1) as usize);
        let tag = node.tag.as_deref().unwrap_or("");
        out.push(format!("{indent}TAG:{tag}"));
        if let Some(text) = node.text.as_deref() {
            out.push(format!("{indent}  TEXT:{text}"));
        }
    }
    out
}
