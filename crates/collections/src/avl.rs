//! Self-balancing order index keyed by `i32`.
//!
//! Unique keys only: inserting an existing key is a no-op (first
//! insertion wins). The tree is rebuilt wholesale by each layout pass,
//! so there is no removal operation. Height stays logarithmic, which
//! keeps the recursive insert/traversal helpers safely bounded.

type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug)]
struct AvlNode<T> {
    key: i32,
    payload: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> AvlNode<T> {
    fn new(key: i32, payload: T) -> Box<Self> {
        Box::new(Self {
            key,
            payload,
            height: 1,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
    rotations: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_of<T>(node: &AvlNode<T>) -> i32 {
    height(&node.left) - height(&node.right)
}

fn update_height<T>(node: &mut AvlNode<T>) {
    node.height = height(&node.left).max(height(&node.right)) + 1;
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Rotations performed across all inserts so far.
    pub fn rotation_count(&self) -> usize {
        self.rotations
    }

    /// Inserts `key -> payload`; a duplicate key leaves the tree
    /// unchanged and drops the payload.
    pub fn insert(&mut self, key: i32, payload: T) {
        let root = self.root.take();
        let mut inserted = false;
        self.root = Some(Self::insert_node(
            root,
            key,
            payload,
            &mut self.rotations,
            &mut inserted,
        ));
        if inserted {
            self.len += 1;
        }
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Payloads in ascending key order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        Self::in_order_node(&self.root, &mut out);
        out
    }

    /// Keys in ascending order; test/debug aid.
    pub fn keys_in_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        Self::keys_node(&self.root, &mut out);
        out
    }

    /// Payloads with keys in `[min, max]`, ascending by key.
    pub fn range_query(&self, min: i32, max: i32) -> Vec<&T> {
        let mut out = Vec::new();
        Self::range_node(&self.root, min, max, &mut out);
        out
    }

    fn insert_node(
        link: Link<T>,
        key: i32,
        payload: T,
        rotations: &mut usize,
        inserted: &mut bool,
    ) -> Box<AvlNode<T>> {
        let mut node = match link {
            None => {
                *inserted = true;
                return AvlNode::new(key, payload);
            }
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            std::cmp::Ordering::Less => {
                node.left = Some(Self::insert_node(
                    node.left.take(),
                    key,
                    payload,
                    rotations,
                    inserted,
                ));
            }
            std::cmp::Ordering::Greater => {
                node.right = Some(Self::insert_node(
                    node.right.take(),
                    key,
                    payload,
                    rotations,
                    inserted,
                ));
            }
            // First insertion wins.
            std::cmp::Ordering::Equal => return node,
        }

        update_height(&mut node);
        let balance = balance_of(&node);

        let rebalanced = if balance > 1 && key < node.left.as_ref().expect("left-heavy").key {
            // left-left
            Self::rotate_right(node, rotations)
        } else if balance < -1 && key > node.right.as_ref().expect("right-heavy").key {
            // right-right
            Self::rotate_left(node, rotations)
        } else if balance > 1 {
            // left-right
            let left = node.left.take().expect("left-heavy");
            node.left = Some(Self::rotate_left(left, rotations));
            Self::rotate_right(node, rotations)
        } else if balance < -1 {
            // right-left
            let right = node.right.take().expect("right-heavy");
            node.right = Some(Self::rotate_right(right, rotations));
            Self::rotate_left(node, rotations)
        } else {
            node
        };

        debug_assert!(
            (-1..=1).contains(&balance_of(&rebalanced)),
            "balance factor out of range after insert of key {key}"
        );
        rebalanced
    }

    fn rotate_right(mut y: Box<AvlNode<T>>, rotations: &mut usize) -> Box<AvlNode<T>> {
        let mut x = y.left.take().expect("rotate_right needs a left child");
        y.left = x.right.take();
        update_height(&mut y);
        x.right = Some(y);
        update_height(&mut x);
        *rotations += 1;
        x
    }

    fn rotate_left(mut x: Box<AvlNode<T>>, rotations: &mut usize) -> Box<AvlNode<T>> {
        let mut y = x.right.take().expect("rotate_left needs a right child");
        x.right = y.left.take();
        update_height(&mut x);
        y.left = Some(x);
        update_height(&mut y);
        *rotations += 1;
        y
    }

    fn in_order_node<'a>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
        if let Some(node) = link {
            Self::in_order_node(&node.left, out);
            out.push(&node.payload);
            Self::in_order_node(&node.right, out);
        }
    }

    fn keys_node(link: &Link<T>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            Self::keys_node(&node.left, out);
            out.push(node.key);
            Self::keys_node(&node.right, out);
        }
    }

    fn range_node<'a>(link: &'a Link<T>, min: i32, max: i32, out: &mut Vec<&'a T>) {
        let Some(node) = link else {
            return;
        };
        if node.key > min {
            Self::range_node(&node.left, min, max, out);
        }
        if node.key >= min && node.key <= max {
            out.push(&node.payload);
        }
        if node.key < max {
            Self::range_node(&node.right, min, max, out);
        }
    }

    #[cfg(test)]
    fn is_balanced(&self) -> bool {
        fn check<T>(link: &Link<T>) -> Option<i32> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            if (left - right).abs() > 1 {
                return None;
            }
            Some(left.max(right) + 1)
        }
        check(&self.root).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_is_strictly_ascending_and_unique() {
        let mut tree = AvlTree::new();
        for key in [40, 10, 30, 20, 50, 10, 30, 60, 5] {
            tree.insert(key, key);
        }
        let keys = tree.keys_in_order();
        assert_eq!(keys, vec![5, 10, 20, 30, 40, 50, 60]);
        assert!(
            keys.windows(2).all(|pair| pair[0] < pair[1]),
            "expected strictly ascending keys, got: {keys:?}"
        );
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn stays_balanced_under_ascending_inserts() {
        let mut tree = AvlTree::new();
        for key in 0..1_000 {
            tree.insert(key, key);
            assert!(tree.is_balanced(), "unbalanced after inserting {key}");
        }
        // A thousand ascending keys in a plain BST would be a spine of
        // height 1000; balanced height must stay logarithmic.
        assert!(
            tree.height() <= 11,
            "expected height <= 11 for 1000 keys, got {}",
            tree.height()
        );
        assert!(tree.rotation_count() > 0);
    }

    #[test]
    fn stays_balanced_under_descending_and_mixed_inserts() {
        let mut tree = AvlTree::new();
        for key in (0..500).rev() {
            tree.insert(key, ());
        }
        for key in [250, 777, -3, 499, 0] {
            tree.insert(key, ());
        }
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 502);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut tree = AvlTree::new();
        tree.insert(7, "first");
        tree.insert(7, "second");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.in_order(), vec![&"first"], "first insertion must win");
    }

    #[test]
    fn contains_finds_only_inserted_keys() {
        let mut tree = AvlTree::new();
        for key in [2, 4, 6, 8] {
            tree.insert(key, ());
        }
        assert!(tree.contains(4));
        assert!(!tree.contains(5));
        assert!(!tree.contains(-1));
    }

    #[test]
    fn range_query_returns_inclusive_bounds_in_key_order() {
        let mut tree = AvlTree::new();
        for key in [15, 3, 9, 27, 21, 1, 33] {
            tree.insert(key, key * 10);
        }
        let hits: Vec<i32> = tree.range_query(3, 21).into_iter().copied().collect();
        assert_eq!(hits, vec![30, 90, 150, 210]);
        assert!(tree.range_query(100, 200).is_empty());
        // Degenerate range covering a single key.
        let single: Vec<i32> = tree.range_query(27, 27).into_iter().copied().collect();
        assert_eq!(single, vec![270]);
    }
}
