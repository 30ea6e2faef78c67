//! End-to-end runs of the parse, style, layout, and emit stages.

use layout::{layout_document, page_stats};
use markup::{apply_styles, build, inline_text, outline_lines, style_registry, tokenize};
use render::script_lines;

fn parse(input: &str) -> markup::Document {
    build(&tokenize(input))
}

#[test]
fn heading_and_paragraph_share_the_root_container() {
    let doc = parse("<h1>Title</h1><p>Hello <strong>World</strong></p>");
    let children: Vec<_> = doc
        .children(doc.root())
        .map(|id| doc.node(id).tag.clone().unwrap())
        .collect();
    assert_eq!(children, vec!["h1", "p"]);

    let p = doc.children(doc.root()).nth(1).unwrap();
    assert_eq!(inline_text(&doc, p), "Hello **World**");
}

#[test]
fn unterminated_span_is_absorbed_by_the_closing_div() {
    let doc = parse("<div><span>A</div><p>after</p>");
    let div = doc.children(doc.root()).next().unwrap();
    assert_eq!(doc.node(div).tag.as_deref(), Some("div"));
    let span = doc.children(div).next().unwrap();
    assert_eq!(doc.node(span).tag.as_deref(), Some("span"));
    assert_eq!(doc.node(span).text.as_deref(), Some("A"));
    // The closing scan popped both span and div, so p is a root child.
    let p = doc.children(doc.root()).nth(1).unwrap();
    assert_eq!(doc.node(p).tag.as_deref(), Some("p"));
}

#[test]
fn unknown_tag_pair_vanishes_and_its_text_stays() {
    let doc = parse("<p>keep <foo>Text</foo></p>");
    let p = doc.children(doc.root()).next().unwrap();
    assert_eq!(doc.children(p).count(), 0);
    assert_eq!(doc.node(p).text.as_deref(), Some("keep Text"));
}

#[test]
fn full_pipeline_produces_dump_and_script() {
    let mut doc = parse(
        "<html><head><title>Demo Page</title></head>\
         <body><h1>Welcome</h1><h2>News</h2>\
         <p>Read <em>this</em> and <strong>that</strong>.</p></body></html>",
    );
    apply_styles(&mut doc, &style_registry());
    let indexes = layout_document(&mut doc, 800);

    let dump = outline_lines(&doc);
    assert_eq!(dump[0], "TAG:html");
    assert!(dump.contains(&"      TEXT:Demo Page".to_string()));
    assert!(dump.contains(&"    TAG:h1".to_string()));

    assert_eq!(
        script_lines(&doc),
        vec![
            "TITLE: Demo Page",
            "H1: Welcome",
            "H2: News",
            "P: Read and . *this* **that**",
        ]
    );

    let stats = page_stats(&doc, &indexes);
    assert_eq!(stats.tree_size, doc.node_count());
    assert!(stats.spatial_valid);
    assert!(!stats.graph_has_cycle);

    // Every node got geometry and the graph mirrors the tree depths.
    for id in doc.pre_order() {
        let node = doc.node(id);
        assert!(node.rect.height > 0);
        assert_eq!(
            indexes.graph.shortest_path(doc.root().index(), id.index()),
            Some(node.depth as usize)
        );
    }
}
