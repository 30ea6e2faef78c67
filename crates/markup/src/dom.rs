//! Arena-backed document tree.
//!
//! Every node lives in one `Vec` owned by [`Document`]; links between
//! nodes (`parent`, `first_child`, `next_sibling`) are plain ids into
//! that arena. The arena is the single owner, so teardown is one `Vec`
//! drop with no per-node frees and no double-free risk. Ids are
//! assigned monotonically and double as the vertex ids of the element
//! graph built by the index pass.
//!
//! Traversals are all iterative with explicit work stacks/queues:
//! malformed or hostile input can nest arbitrarily deep and must not
//! be able to exhaust the call stack.

use collections::StrMap;

/// Stable handle to a node in a [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// Box geometry filled in by the layout pass; zero until then.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug)]
pub struct DocumentNode {
    /// Lower-cased tag name; `None` only for the synthetic root.
    pub tag: Option<String>,
    /// Accumulated text content, adjacent runs joined by one space.
    pub text: Option<String>,
    pub attributes: StrMap,
    pub styles: StrMap,
    /// Root is 0, children one below their parent.
    pub depth: u32,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub rect: Rect,
    /// Render-order key; the layout pass sets it to the node depth.
    pub z_order: i32,
}

impl DocumentNode {
    fn new(tag: Option<String>) -> Self {
        Self {
            tag,
            text: None,
            attributes: StrMap::new(),
            styles: StrMap::new(),
            depth: 0,
            parent: None,
            first_child: None,
            next_sibling: None,
            rect: Rect::default(),
            z_order: 0,
        }
    }

    pub fn tag_is(&self, name: &str) -> bool {
        self.tag.as_deref() == Some(name)
    }
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<DocumentNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only the synthetic root container.
    pub fn new() -> Self {
        Self {
            nodes: vec![DocumentNode::new(None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &DocumentNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut DocumentNode {
        &mut self.nodes[id.index()]
    }

    /// Total nodes in the arena, synthetic root included. One arena
    /// slot exists per created node, so this doubles as the
    /// allocation count for leak checks.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a fresh element node; linked in by `append_child`.
    pub fn create_element(&mut self, tag: String) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(DocumentNode::new(Some(tag)));
        id
    }

    /// Appends `child` as the last child of `parent`, walking the
    /// sibling chain. Sets the child's parent link and depth.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(child != parent, "node cannot be its own child");
        let depth = self.node(parent).depth + 1;
        {
            let node = self.node_mut(child);
            node.parent = Some(parent);
            node.depth = depth;
        }
        match self.node(parent).first_child {
            None => self.node_mut(parent).first_child = Some(child),
            Some(first) => {
                let mut cursor = first;
                while let Some(next) = self.node(cursor).next_sibling {
                    cursor = next;
                }
                self.node_mut(cursor).next_sibling = Some(child);
            }
        }
    }

    /// Space-joins `text` onto the node's accumulated content.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        let node = self.node_mut(id);
        match &mut node.text {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(text);
            }
            None => node.text = Some(text.to_string()),
        }
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            doc: self,
            cursor: self.node(id).first_child,
        }
    }

    /// Node ids in pre-order (node before its children, siblings in
    /// document order).
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            let children: Vec<NodeId> = self.children(id).collect();
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Node ids in post-order (children before their node).
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root(), false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                out.push(id);
                continue;
            }
            stack.push((id, true));
            let children: Vec<NodeId> = self.children(id).collect();
            for &child in children.iter().rev() {
                stack.push((child, false));
            }
        }
        out
    }

    /// Node ids level by level, siblings in document order.
    pub fn level_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(self.root());
        while let Some(id) = queue.pop_front() {
            out.push(id);
            queue.extend(self.children(id));
        }
        out
    }

    /// Longest root-to-leaf node count.
    pub fn tree_height(&self) -> usize {
        let mut best = 0;
        let mut stack = vec![(self.root(), 1usize)];
        while let Some((id, depth)) = stack.pop() {
            best = best.max(depth);
            for child in self.children(id) {
                stack.push((child, depth + 1));
            }
        }
        best
    }

    /// First `<title>` element in pre-order, if any.
    pub fn title_node(&self) -> Option<NodeId> {
        self.pre_order()
            .into_iter()
            .find(|&id| self.node(id).tag_is("title"))
    }

    /// Assembled inline text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.title_node()
            .map(|id| crate::inline_text::inline_text(self, id))
    }
}

pub struct Children<'a> {
    doc: &'a Document,
    cursor: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.doc.node(id).next_sibling;
        Some(id)
    }
}
