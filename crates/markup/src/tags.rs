//! Fixed registry of recognized tag names.
//!
//! The tree builder consults this set before any tag token may create
//! or close a node; everything else is tolerated and skipped. The set
//! is compiled in, immutable, and sorted so membership is a binary
//! search.

const KNOWN_TAGS: &[&str] = &[
    "a", "b", "base", "big", "body", "br", "button", "code", "dd", "div", "dl", "dt", "em",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "hr", "html", "i", "img", "input", "li",
    "link", "meta", "ol", "option", "p", "pre", "script", "select", "small", "span", "strong",
    "style", "table", "tbody", "td", "textarea", "th", "thead", "title", "tr", "u", "ul",
];

/// True when `name` (already lower-cased by the tokenizer) is a
/// recognized tag.
pub fn is_known_tag(name: &str) -> bool {
    KNOWN_TAGS.binary_search(&name).is_ok()
}
