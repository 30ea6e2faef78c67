//! Stack-driven tree construction from the token stream.
//!
//! One forward pass over the tokens with a stack of open element ids.
//! The stack starts holding the synthetic root and the root is never
//! popped, so elements arriving outside any open tag still attach as
//! root children. Text needs a real open element; with only the root
//! open it is dropped.

use crate::dom::{Document, NodeId};
use crate::tags::is_known_tag;
use crate::token::Token;

/// Builds a document tree from tokens in one pass.
///
/// Recovery rules for malformed input:
/// - an open tag with an unrecognized name is skipped (its text and
///   children attach to the nearest recognized ancestor),
/// - a close tag pops every open element above its match; a close tag
///   with no open match is ignored,
/// - elements still open at end of input are left attached as-is.
pub fn build(tokens: &[Token]) -> Document {
    let mut doc = Document::new();
    let mut open: Vec<NodeId> = vec![doc.root()];

    for token in tokens {
        match token {
            Token::Open { name, attributes } => {
                if !is_known_tag(name) {
                    log::debug!(target: "markup.builder", "skipping unknown tag <{name}>");
                    continue;
                }
                let id = doc.create_element(name.clone());
                for (key, value) in attributes {
                    doc.node_mut(id).attributes.insert(key, value);
                }
                let parent = *open.last().expect("root frame never popped");
                doc.append_child(parent, id);
                open.push(id);
            }
            Token::SelfClose(name) => {
                if !is_known_tag(name) {
                    log::debug!(target: "markup.builder", "skipping unknown tag <{name}/>");
                    continue;
                }
                let id = doc.create_element(name.clone());
                let parent = *open.last().expect("root frame never popped");
                doc.append_child(parent, id);
            }
            Token::Close(name) => {
                // Scan from the top of the stack, never past the root.
                let matched = open
                    .iter()
                    .rposition(|&id| doc.node(id).tag.as_deref() == Some(name.as_str()));
                match matched {
                    Some(position) if position > 0 => open.truncate(position),
                    _ => {
                        log::debug!(target: "markup.builder", "ignoring unmatched </{name}>");
                    }
                }
            }
            Token::Text(text) => {
                // Only the synthetic root open means no element is
                // open; such text has no home and is dropped.
                if open.len() > 1 {
                    let top = *open.last().expect("root frame never popped");
                    doc.append_text(top, text);
                } else {
                    log::debug!(target: "markup.builder", "dropping text outside any element");
                }
            }
        }
    }

    doc
}
