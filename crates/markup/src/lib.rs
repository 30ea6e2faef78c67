//! Markup front end: tokenizer, tag registry and the arena document
//! tree, plus the text utilities layered over a finished tree.
//!
//! The pipeline is `tokenize` → `build` → (style/layout passes by
//! callers). Malformed input never fails a call here; unknown tags and
//! stray close tags degrade the tree instead (see `builder`).

pub mod builder;
pub mod dom;
pub mod inline_text;
pub mod outline;
pub mod style;
pub mod tags;
pub mod token;
pub mod tokenizer;

pub use crate::builder::build;
pub use crate::dom::{Document, DocumentNode, NodeId, Rect};
pub use crate::inline_text::inline_text;
pub use crate::outline::outline_lines;
pub use crate::style::{apply_styles, style_registry};
pub use crate::tags::is_known_tag;
pub use crate::token::Token;
pub use crate::tokenizer::tokenize;
