//! Adjacency-list digraph over dense vertex ids.
//!
//! Vertices are allocated contiguously from 0 up to a capacity fixed
//! at construction. The index pass builds one vertex per document node
//! and one edge per parent→child link, so the happy path is always a
//! forest; cycle detection and unreachable-path handling exist as
//! structural guarantees, not expected outcomes. Exceeding the vertex
//! capacity is a programming error and fails loudly.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct DenseGraph {
    adjacency: Vec<Vec<usize>>,
    vertex_count: usize,
}

impl DenseGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: (0..capacity).map(|_| Vec::new()).collect(),
            vertex_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// Highest vertex id seen so far, plus one.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Marks `vertex` as known. Idempotent; only ever grows the count.
    pub fn add_vertex(&mut self, vertex: usize) {
        assert!(
            vertex < self.adjacency.len(),
            "vertex {vertex} exceeds graph capacity {}",
            self.adjacency.len()
        );
        self.vertex_count = self.vertex_count.max(vertex + 1);
    }

    pub fn add_edge(&mut self, src: usize, dst: usize) {
        self.add_vertex(src);
        self.add_vertex(dst);
        self.adjacency[src].push(dst);
    }

    /// Level-order traversal from `start`; every reachable vertex
    /// appears exactly once.
    pub fn bfs(&self, start: usize) -> Vec<usize> {
        assert!(start < self.vertex_count, "bfs start {start} unknown");
        let mut visited = vec![false; self.vertex_count];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);
        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &next in &self.adjacency[vertex] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Depth-first traversal from `start`, explicit stack. Neighbors
    /// are pushed in reverse so they are visited in insertion order.
    pub fn dfs(&self, start: usize) -> Vec<usize> {
        assert!(start < self.vertex_count, "dfs start {start} unknown");
        let mut visited = vec![false; self.vertex_count];
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            order.push(vertex);
            for &next in self.adjacency[vertex].iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
        order
    }

    /// True when any directed cycle exists. Uses an in-progress marker
    /// separate from the visited marker; a back edge to an in-progress
    /// vertex is a cycle, an edge to a finished vertex is not.
    pub fn has_cycle(&self) -> bool {
        let mut visited = vec![false; self.vertex_count];
        let mut in_progress = vec![false; self.vertex_count];
        for start in 0..self.vertex_count {
            if !visited[start] && self.cycle_from(start, &mut visited, &mut in_progress) {
                return true;
            }
        }
        false
    }

    // Iterative DFS with per-frame neighbor cursors, so the
    // in-progress flag is cleared exactly when the frame unwinds.
    fn cycle_from(&self, start: usize, visited: &mut [bool], in_progress: &mut [bool]) -> bool {
        let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
        visited[start] = true;
        in_progress[start] = true;
        while let Some(&mut (vertex, ref mut cursor)) = frames.last_mut() {
            if let Some(&next) = self.adjacency[vertex].get(*cursor) {
                *cursor += 1;
                if in_progress[next] {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    in_progress[next] = true;
                    frames.push((next, 0));
                }
            } else {
                in_progress[vertex] = false;
                frames.pop();
            }
        }
        false
    }

    /// Vertices in dependency order: every edge src→dst places src
    /// before dst. Post-order DFS completion order, reversed.
    pub fn topological_sort(&self) -> Vec<usize> {
        let mut visited = vec![false; self.vertex_count];
        let mut finished = Vec::with_capacity(self.vertex_count);
        for start in 0..self.vertex_count {
            if visited[start] {
                continue;
            }
            let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
            visited[start] = true;
            while let Some(&mut (vertex, ref mut cursor)) = frames.last_mut() {
                if let Some(&next) = self.adjacency[vertex].get(*cursor) {
                    *cursor += 1;
                    if !visited[next] {
                        visited[next] = true;
                        frames.push((next, 0));
                    }
                } else {
                    finished.push(vertex);
                    frames.pop();
                }
            }
        }
        finished.reverse();
        finished
    }

    /// Hop count of the shortest path, or `None` when `dst` is
    /// unreachable from `src`.
    pub fn shortest_path(&self, src: usize, dst: usize) -> Option<usize> {
        assert!(src < self.vertex_count, "shortest_path src {src} unknown");
        assert!(dst < self.vertex_count, "shortest_path dst {dst} unknown");
        if src == dst {
            return Some(0);
        }
        let mut distance = vec![usize::MAX; self.vertex_count];
        let mut queue = VecDeque::new();
        distance[src] = 0;
        queue.push_back(src);
        while let Some(vertex) = queue.pop_front() {
            for &next in &self.adjacency[vertex] {
                if distance[next] == usize::MAX {
                    distance[next] = distance[vertex] + 1;
                    if next == dst {
                        return Some(distance[next]);
                    }
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 → {1, 2}, 1 → {3, 4}: the parent/child shape the index pass
    // produces for a five-node document.
    fn tree_graph() -> DenseGraph {
        let mut graph = DenseGraph::with_capacity(8);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(1, 4);
        graph
    }

    #[test]
    fn bfs_visits_each_reachable_vertex_once_in_level_order() {
        let graph = tree_graph();
        assert_eq!(graph.bfs(0), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(1), vec![1, 3, 4]);
    }

    #[test]
    fn dfs_follows_first_child_before_siblings() {
        let graph = tree_graph();
        assert_eq!(graph.dfs(0), vec![0, 1, 3, 4, 2]);
    }

    #[test]
    fn tree_edges_never_report_a_cycle() {
        let graph = tree_graph();
        assert!(!graph.has_cycle());
    }

    #[test]
    fn back_edge_is_reported_as_a_cycle() {
        let mut graph = tree_graph();
        graph.add_edge(4, 0);
        assert!(graph.has_cycle());
    }

    #[test]
    fn diamond_sharing_is_not_a_cycle() {
        // Two paths into the same vertex, no back edge.
        let mut graph = DenseGraph::with_capacity(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut graph = DenseGraph::with_capacity(2);
        graph.add_edge(0, 0);
        assert!(graph.has_cycle());
    }

    #[test]
    fn topological_sort_places_every_edge_forward() {
        let graph = tree_graph();
        let order = graph.topological_sort();
        assert_eq!(order.len(), 5);
        let position = |v: usize| order.iter().position(|&o| o == v).unwrap();
        for (src, dst) in [(0, 1), (0, 2), (1, 3), (1, 4)] {
            assert!(
                position(src) < position(dst),
                "edge {src}->{dst} out of order in {order:?}"
            );
        }
    }

    #[test]
    fn shortest_path_counts_hops_and_detects_unreachable() {
        let graph = tree_graph();
        assert_eq!(graph.shortest_path(0, 0), Some(0));
        assert_eq!(graph.shortest_path(0, 2), Some(1));
        assert_eq!(graph.shortest_path(0, 4), Some(2));
        // Edges are directed parent→child; the reverse is unreachable.
        assert_eq!(graph.shortest_path(4, 0), None);
    }

    #[test]
    fn add_vertex_is_idempotent_and_monotonic() {
        let mut graph = DenseGraph::with_capacity(10);
        graph.add_vertex(3);
        graph.add_vertex(3);
        graph.add_vertex(1);
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    #[should_panic(expected = "exceeds graph capacity")]
    fn exceeding_capacity_fails_loudly() {
        let mut graph = DenseGraph::with_capacity(2);
        graph.add_vertex(2);
    }

    #[test]
    fn deep_chain_does_not_overflow_traversals() {
        let n = 100_000;
        let mut graph = DenseGraph::with_capacity(n);
        for v in 0..n - 1 {
            graph.add_edge(v, v + 1);
        }
        assert_eq!(graph.dfs(0).len(), n);
        assert!(!graph.has_cycle());
        assert_eq!(graph.topological_sort().len(), n);
        assert_eq!(graph.shortest_path(0, n - 1), Some(n - 1));
    }
}
