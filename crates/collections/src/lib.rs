//! General-purpose structures backing the document pipeline.
//!
//! Each structure is deliberately self-contained: the attribute/style
//! store ([`StrMap`]), the render-order index ([`AvlTree`]), the
//! vertical-position index ([`SpatialTree`]) and the element
//! relationship graph ([`DenseGraph`]) all carry their own invariants
//! and are tested in isolation from the parsing pipeline.

pub mod avl;
pub mod bst;
pub mod graph;
pub mod table;

pub use crate::avl::AvlTree;
pub use crate::bst::SpatialTree;
pub use crate::graph::DenseGraph;
pub use crate::table::StrMap;
