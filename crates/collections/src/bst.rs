//! Unbalanced search tree keyed by vertical position.
//!
//! Several elements can share a y offset, so equal keys are accepted:
//! a duplicate insert splices the new node into the left-child pointer
//! of the first node carrying that key. The chained nodes keep the BST
//! ordering intact relative to every other key, and range queries walk
//! the chain so boundary duplicates are never dropped.
//!
//! Layout inserts keys in ascending order, which degenerates this tree
//! into a right spine. Everything here therefore iterates with
//! explicit stacks (including drop) instead of recursing node-deep —
//! the exception is `remove`, which only descends a single root-to-key
//! path.

use std::cmp::Ordering;

type Link<T> = Option<Box<SpatialNode<T>>>;

#[derive(Debug)]
struct SpatialNode<T> {
    key: i32,
    payload: T,
    left: Link<T>,
    right: Link<T>,
}

#[derive(Debug)]
pub struct SpatialTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for SpatialTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpatialTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, key: i32, payload: T) {
        self.len += 1;
        let mut cursor = &mut self.root;
        loop {
            match cursor {
                None => {
                    *cursor = Some(Box::new(SpatialNode {
                        key,
                        payload,
                        left: None,
                        right: None,
                    }));
                    return;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => cursor = &mut node.left,
                    Ordering::Greater => cursor = &mut node.right,
                    Ordering::Equal => {
                        // Same key: hang the new node off the left
                        // pointer, carrying the old left subtree down.
                        let fresh = Box::new(SpatialNode {
                            key,
                            payload,
                            left: node.left.take(),
                            right: None,
                        });
                        node.left = Some(fresh);
                        return;
                    }
                },
            }
        }
    }

    /// First payload stored under `key`, if any.
    pub fn search(&self, key: i32) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.payload),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Removes the first node found under `key`; chained duplicates
    /// (if any) remain reachable. No-op for an absent key.
    pub fn remove(&mut self, key: i32) {
        if Self::remove_node(&mut self.root, key) {
            self.len -= 1;
        }
    }

    fn remove_node(link: &mut Link<T>, key: i32) -> bool {
        let Some(node) = link else {
            return false;
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::remove_node(&mut node.left, key),
            Ordering::Greater => Self::remove_node(&mut node.right, key),
            Ordering::Equal => {
                let mut node = link.take().expect("matched node present");
                *link = match (node.left.take(), node.right.take()) {
                    (None, right) => right,
                    (left, None) => left,
                    (Some(left), Some(right)) => {
                        // Two children: pull up the in-order successor.
                        let (successor, right) = Self::detach_min(right);
                        let mut successor = successor;
                        successor.left = Some(left);
                        successor.right = right;
                        Some(successor)
                    }
                };
                true
            }
        }
    }

    // Splits the minimum node out of a non-empty subtree, returning it
    // together with the remainder. Iterative: the subtree may be a
    // long left spine of chained duplicates.
    fn detach_min(mut subtree: Box<SpatialNode<T>>) -> (Box<SpatialNode<T>>, Link<T>) {
        if subtree.left.is_none() {
            let rest = subtree.right.take();
            return (subtree, rest);
        }
        let mut parent = &mut subtree;
        while parent.left.as_ref().expect("checked above").left.is_some() {
            parent = parent.left.as_mut().expect("checked above");
        }
        let mut min = parent.left.take().expect("loop invariant");
        parent.left = min.right.take();
        (min, Some(subtree))
    }

    /// Payloads in ascending key order; chained duplicates appear
    /// together at their key.
    pub fn in_order(&self) -> Vec<&T> {
        self.range_query(i32::MIN, i32::MAX)
    }

    /// Payloads with keys in `[min, max]`, ascending by key. Equal-key
    /// chains hang left, so the left edge is followed while
    /// `key >= min`; strict `>` would skip duplicates sitting exactly
    /// on the lower bound.
    pub fn range_query(&self, min: i32, max: i32) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&SpatialNode<T>> = Vec::new();
        let mut cursor = self.root.as_deref();
        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = if node.key >= min {
                    node.left.as_deref()
                } else {
                    None
                };
            }
            let node = stack.pop().expect("outer loop guarantees a frame");
            if node.key >= min && node.key <= max {
                out.push(&node.payload);
            }
            cursor = if node.key < max {
                node.right.as_deref()
            } else {
                None
            };
        }
        out
    }

    /// Structural check: every node's left subtree holds keys `<=` its
    /// own (equality from duplicate chains), every right subtree holds
    /// strictly greater keys. Testing aid.
    pub fn is_valid(&self) -> bool {
        let mut stack: Vec<(&SpatialNode<T>, i64, i64)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, i64::MIN, i64::MAX));
        }
        while let Some((node, min, max)) = stack.pop() {
            let key = i64::from(node.key);
            if key < min || key > max {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, min, key));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, key + 1, max));
            }
        }
        true
    }

    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&SpatialNode<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        best
    }

    /// Payload at the smallest key (topmost element).
    pub fn min(&self) -> Option<&T> {
        self.leftmost().map(|node| &node.payload)
    }

    /// Payload at the largest key (bottommost element).
    pub fn max(&self) -> Option<&T> {
        let mut cursor = self.root.as_deref()?;
        while let Some(right) = cursor.right.as_deref() {
            cursor = right;
        }
        Some(&cursor.payload)
    }

    fn leftmost(&self) -> Option<&SpatialNode<T>> {
        let mut cursor = self.root.as_deref()?;
        while let Some(left) = cursor.left.as_deref() {
            cursor = left;
        }
        Some(cursor)
    }
}

impl<T> Drop for SpatialTree<T> {
    // Ascending-key insertion makes right spines as long as the whole
    // document; the default recursive drop would overflow on them.
    fn drop(&mut self) {
        let mut pending: Vec<Box<SpatialNode<T>>> = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(tree: &SpatialTree<i32>, min: i32, max: i32) -> Vec<i32> {
        tree.range_query(min, max).into_iter().copied().collect()
    }

    #[test]
    fn range_query_is_exact_and_ascending() {
        let mut tree = SpatialTree::new();
        for (key, payload) in [(50, 1), (20, 2), (80, 3), (10, 4), (35, 5), (65, 6)] {
            tree.insert(key, payload);
        }
        assert_eq!(collect(&tree, 20, 65), vec![2, 5, 1, 6]);
        assert_eq!(collect(&tree, i32::MIN, i32::MAX), vec![4, 2, 5, 1, 6, 3]);
        assert!(collect(&tree, 81, 100).is_empty());
        assert!(tree.is_valid());
    }

    #[test]
    fn duplicate_keys_are_all_kept_and_all_visited() {
        let mut tree = SpatialTree::new();
        tree.insert(30, "a");
        tree.insert(10, "b");
        tree.insert(30, "c");
        tree.insert(30, "d");
        tree.insert(40, "e");
        assert_eq!(tree.len(), 5);

        let all: Vec<&str> = tree.in_order().into_iter().copied().collect();
        assert_eq!(
            all,
            vec!["b", "c", "d", "a", "e"],
            "duplicates must stay grouped at their key"
        );
        assert!(tree.is_valid());
    }

    #[test]
    fn range_query_includes_duplicates_on_the_lower_bound() {
        let mut tree = SpatialTree::new();
        tree.insert(5, 0);
        tree.insert(20, 1);
        tree.insert(20, 2);
        tree.insert(20, 3);
        tree.insert(90, 4);
        let hits = collect(&tree, 20, 50);
        assert_eq!(
            hits,
            vec![2, 3, 1],
            "all entries chained at the boundary key must be visited"
        );
    }

    #[test]
    fn range_query_includes_duplicates_on_the_upper_bound() {
        let mut tree = SpatialTree::new();
        tree.insert(1, 0);
        tree.insert(60, 1);
        tree.insert(60, 2);
        let hits = collect(&tree, 0, 60);
        assert_eq!(hits, vec![0, 2, 1]);
    }

    #[test]
    fn search_returns_first_match_or_none() {
        let mut tree = SpatialTree::new();
        tree.insert(12, "first");
        tree.insert(12, "second");
        assert_eq!(tree.search(12), Some(&"first"));
        assert_eq!(tree.search(13), None);
    }

    #[test]
    fn remove_keeps_structure_valid() {
        let mut tree = SpatialTree::new();
        for key in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(key, key);
        }
        tree.remove(50); // two children
        tree.remove(20); // leaf
        tree.remove(70); // one child after prior removals
        tree.remove(999); // absent key is a no-op
        assert_eq!(tree.len(), 4);
        assert!(tree.is_valid());
        assert_eq!(collect(&tree, i32::MIN, i32::MAX), vec![30, 40, 60, 80]);
    }

    #[test]
    fn ascending_inserts_do_not_overflow_on_traversal_or_drop() {
        let mut tree = SpatialTree::new();
        for key in 0..200_000 {
            tree.insert(key, key);
        }
        assert_eq!(tree.height(), 200_000, "ascending keys form a right spine");
        assert_eq!(tree.range_query(0, 199_999).len(), 200_000);
        drop(tree);
    }

    #[test]
    fn min_and_max_follow_the_key_extremes() {
        let mut tree = SpatialTree::new();
        assert_eq!(tree.min(), None);
        for (index, key) in [7, 3, 11, 3].into_iter().enumerate() {
            tree.insert(key, index);
        }
        assert_eq!(tree.max(), Some(&2));
        // The chained duplicate at 3 sits below the original, so the
        // leftmost node is the most recently inserted 3.
        assert_eq!(tree.min(), Some(&3));
    }
}
