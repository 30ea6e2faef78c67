//! Flattens a subtree's text into one line, keeping emphasis as
//! lightweight markers: `strong`/`b` wrap their text in `**`,
//! `em`/`i` in `*`, and `br` contributes a plain break in the run.

use crate::dom::{Document, NodeId};

struct Frame {
    node: NodeId,
    next: Option<NodeId>,
    pieces: Vec<String>,
}

/// Assembles the inline text of the subtree rooted at `id`.
///
/// A node's own text comes before its children's, and sibling
/// fragments are joined by a single space. Empty fragments are
/// dropped, so a childless `br` or an empty wrapper adds nothing.
pub fn inline_text(doc: &Document, id: NodeId) -> String {
    let mut stack = vec![new_frame(doc, id)];
    loop {
        let top = stack.last_mut().expect("loop exits by returning");
        if let Some(child) = top.next {
            top.next = doc.node(child).next_sibling;
            stack.push(new_frame(doc, child));
            continue;
        }
        let done = stack.pop().expect("loop exits by returning");
        let fragment = finish_frame(doc, done);
        match stack.last_mut() {
            Some(parent) => {
                if !fragment.is_empty() {
                    parent.pieces.push(fragment);
                }
            }
            None => return fragment,
        }
    }
}

fn new_frame(doc: &Document, node: NodeId) -> Frame {
    let mut pieces = Vec::new();
    if let Some(text) = doc.node(node).text.as_deref() {
        pieces.push(text.to_string());
    }
    Frame {
        node,
        next: doc.node(node).first_child,
        pieces,
    }
}

fn finish_frame(doc: &Document, frame: Frame) -> String {
    let joined = frame.pieces.join(" ");
    if joined.is_empty() {
        return joined;
    }
    match doc.node(frame.node).tag.as_deref() {
        Some("strong" | "b") => format!("**{joined}**"),
        Some("em" | "i") => format!("*{joined}*"),
        _ => joined,
    }
}
