//! Boundary output formats: the tree debug dump and the simplified
//! render script consumed by display frontends.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use markup::{Document, inline_text, outline_lines};

/// Failure to write a boundary file; carries the target path.
#[derive(Debug)]
pub struct EmitError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Writes the indented `TAG:`/`TEXT:` tree dump to `path`.
pub fn write_dump(doc: &Document, path: &Path) -> Result<(), EmitError> {
    let mut body = outline_lines(doc).join("\n");
    body.push('\n');
    fs::write(path, body).map_err(|source| EmitError {
        path: path.to_path_buf(),
        source,
    })
}

/// One line per renderable block: at most one `TITLE:` line first,
/// then `H1:`/`H2:`/`H3:`/`P:` lines in document order. Blocks whose
/// assembled inline text is empty are skipped.
pub fn script_lines(doc: &Document) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(title) = doc.title().filter(|title| !title.is_empty()) {
        out.push(format!("TITLE: {title}"));
    }
    for id in doc.pre_order() {
        let prefix = match doc.node(id).tag.as_deref() {
            Some("h1") => "H1",
            Some("h2") => "H2",
            Some("h3") => "H3",
            Some("p") => "P",
            _ => continue,
        };
        let text = inline_text(doc, id);
        if !text.is_empty() {
            out.push(format!("{prefix}: {text}"));
        }
    }
    out
}

/// Writes the render script to `path`.
pub fn write_script(doc: &Document, path: &Path) -> Result<(), EmitError> {
    let lines = script_lines(doc);
    log::debug!(target: "render", "emitting {} script lines", lines.len());
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(path, body).map_err(|source| EmitError {
        path: path.to_path_buf(),
        source,
    })
}
