//! Block layout and the page indexes derived from it.
//!
//! Layout is a single vertical stack: every element is a full-width
//! block positioned in level order, so an element always sits below
//! everything laid out before it. After geometry is assigned, three
//! indexes are built over the same node ids:
//!
//! - an element graph mirroring the parent/child edges of the tree,
//! - an AVL tree keyed by z-order for balanced render ordering,
//! - a spatial tree keyed by y-position for visibility queries.

use collections::{AvlTree, DenseGraph, SpatialTree};
use markup::{Document, NodeId};

pub mod stats;

pub use stats::{PageStats, page_stats};

/// Horizontal page margin and the top offset of the first block.
pub const MARGIN: i32 = 20;
/// Vertical gap between consecutive blocks.
pub const BLOCK_GAP: i32 = 10;

/// Query structures built over a laid-out document.
pub struct PageIndexes {
    /// Parent/child edges, vertex ids equal to node arena indexes.
    pub graph: DenseGraph,
    /// Nodes keyed by z-order. Z-order is the node depth, so one
    /// representative per depth level survives the duplicate rule.
    pub order: AvlTree<NodeId>,
    /// Nodes keyed by y-position; duplicates (same row) are kept.
    pub spatial: SpatialTree<NodeId>,
}

impl PageIndexes {
    /// Ids of nodes whose y-position falls in `[min_y, max_y]`,
    /// ascending by y.
    pub fn visible_in(&self, min_y: i32, max_y: i32) -> Vec<NodeId> {
        self.spatial.range_query(min_y, max_y).into_iter().copied().collect()
    }
}

/// Block height for a tag, in pixels.
pub fn block_height(tag: Option<&str>) -> i32 {
    match tag {
        Some("h1") => 40,
        Some("h2") => 32,
        Some("h3") => 28,
        _ => 20,
    }
}

/// Assigns geometry to every node and builds the page indexes.
///
/// Positions follow the level-order walk of the element graph: the
/// graph is built first from the tree edges, then a breadth-first
/// traversal from the root fixes the vertical order. Each node gets
/// the full content width, a tag-dependent height, and its depth as
/// z-order.
pub fn layout_document(doc: &mut Document, viewport_width: i32) -> PageIndexes {
    let mut graph = DenseGraph::with_capacity(doc.node_count());
    for id in doc.pre_order() {
        graph.add_vertex(id.index());
        if let Some(parent) = doc.node(id).parent {
            graph.add_edge(parent.index(), id.index());
        }
    }

    let content_width = viewport_width - 2 * MARGIN;
    let mut cursor_y = MARGIN;
    for vertex in graph.bfs(doc.root().index()) {
        let id = NodeId::from_index(vertex);
        let height = block_height(doc.node(id).tag.as_deref());
        let depth = doc.node(id).depth;
        let node = doc.node_mut(id);
        node.rect.x = MARGIN;
        node.rect.width = content_width;
        node.rect.height = height;
        node.rect.y = cursor_y;
        node.z_order = depth as i32;
        cursor_y += height + BLOCK_GAP;
    }
    log::debug!(target: "layout", "laid out {} nodes, page height {cursor_y}", doc.node_count());

    let mut order = AvlTree::new();
    let mut spatial = SpatialTree::new();
    for id in doc.pre_order() {
        let node = doc.node(id);
        order.insert(node.z_order, id);
        spatial.insert(node.rect.y, id);
    }

    PageIndexes {
        graph,
        order,
        spatial,
    }
}
