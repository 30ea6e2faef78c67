//! Tag-keyed style registry and the pass that copies matching
//! declarations onto each node.

use collections::StrMap;

use crate::dom::Document;

/// Default per-tag style declarations, `property:value` pairs joined
/// by `;`. Colors are `r,g,b` triples.
pub fn style_registry() -> StrMap {
    let mut registry = StrMap::new();
    registry.insert("h1", "font-size:32;font-weight:bold;color:0,0,0");
    registry.insert("h2", "font-size:24;font-weight:bold;color:0,0,0");
    registry.insert("h3", "font-size:20;font-weight:bold;color:0,0,0");
    registry.insert("h4", "font-size:18;font-weight:bold;color:0,0,0");
    registry.insert("h5", "font-size:16;font-weight:bold;color:0,0,0");
    registry.insert("h6", "font-size:14;font-weight:bold;color:0,0,0");
    registry.insert("p", "font-size:14;font-weight:normal;color:0,0,0");
    registry.insert("strong", "font-weight:bold");
    registry.insert("b", "font-weight:bold");
    registry.insert("em", "font-style:italic");
    registry.insert("i", "font-style:italic");
    registry.insert("body", "font-size:14;color:0,0,0");
    registry.insert("html", "font-size:14;color:0,0,0");
    registry
}

/// Walks the tree in post-order and fills each node's style table
/// from the registry entry for its tag. Tags without an entry keep an
/// empty table.
pub fn apply_styles(doc: &mut Document, registry: &StrMap) {
    for id in doc.post_order() {
        let Some(tag) = doc.node(id).tag.clone() else {
            continue;
        };
        let Some(declarations) = registry.get(&tag) else {
            continue;
        };
        let parsed = parse_declarations(declarations);
        let node = doc.node_mut(id);
        for (property, value) in &parsed {
            node.styles.insert(property, value);
        }
    }
}

fn parse_declarations(input: &str) -> Vec<(String, String)> {
    input
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((property.to_string(), value.to_string()))
        })
        .collect()
}
