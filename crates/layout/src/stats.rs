//! Structure statistics over a laid-out page, for logging and
//! diagnostics.

use std::fmt;

use markup::Document;

use crate::PageIndexes;

/// Snapshot of the document tree and its indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub tree_size: usize,
    pub tree_height: usize,
    pub order_height: i32,
    pub order_rotations: usize,
    pub spatial_height: usize,
    pub spatial_valid: bool,
    pub graph_vertices: usize,
    pub graph_has_cycle: bool,
}

impl fmt::Display for PageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tree {} nodes / height {}, order height {} ({} rotations), \
             spatial height {} (valid: {}), graph {} vertices (cycle: {})",
            self.tree_size,
            self.tree_height,
            self.order_height,
            self.order_rotations,
            self.spatial_height,
            self.spatial_valid,
            self.graph_vertices,
            self.graph_has_cycle,
        )
    }
}

pub fn page_stats(doc: &Document, indexes: &PageIndexes) -> PageStats {
    PageStats {
        tree_size: doc.node_count(),
        tree_height: doc.tree_height(),
        order_height: indexes.order.height(),
        order_rotations: indexes.order.rotation_count(),
        spatial_height: indexes.spatial.height(),
        spatial_valid: indexes.spatial.is_valid(),
        graph_vertices: indexes.graph.vertex_count(),
        graph_has_cycle: indexes.graph.has_cycle(),
    }
}
