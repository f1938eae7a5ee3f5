//! Breadth- and depth-first search and the structural queries built on them.

use super::Graph;
use crate::error::{AlgoError, Result};
use crate::union_find::DisjointSet;
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

impl Graph {
    /// Vertices reachable from `start` in breadth-first order.
    pub fn bfs(&self, start: usize) -> Vec<usize> {
        if start >= self.order() {
            return vec![];
        }
        let mut seen = vec![false; self.order()];
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(vertex) = queue.pop_front() {
            visited.push(vertex);
            for edge in &self.adjacency[vertex] {
                if !seen[edge.to] {
                    seen[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
        visited
    }

    /// Vertices reachable from `start` in depth-first preorder.
    ///
    /// Uses an explicit stack; neighbours are pushed in reverse so the
    /// first-inserted edge is explored first, as in the recursive version.
    pub fn dfs(&self, start: usize) -> Vec<usize> {
        if start >= self.order() {
            return vec![];
        }
        let mut seen = vec![false; self.order()];
        let mut visited = Vec::new();
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            if seen[vertex] {
                continue;
            }
            seen[vertex] = true;
            visited.push(vertex);
            stack.extend(
                self.adjacency[vertex]
                    .iter()
                    .rev()
                    .map(|edge| edge.to)
                    .filter(|&to| !seen[to]),
            );
        }
        visited
    }

    /// Path with the fewest edges from `source` to `target`, both ends included.
    pub fn shortest_path_unweighted(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        if source >= self.order() || target >= self.order() {
            return None;
        }
        let mut parent: Vec<Option<usize>> = vec![None; self.order()];
        let mut seen = vec![false; self.order()];
        let mut queue = VecDeque::from([source]);
        seen[source] = true;
        while let Some(vertex) = queue.pop_front() {
            if vertex == target {
                break;
            }
            for edge in &self.adjacency[vertex] {
                if !seen[edge.to] {
                    seen[edge.to] = true;
                    parent[edge.to] = Some(vertex);
                    queue.push_back(edge.to);
                }
            }
        }
        if !seen[target] {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = parent[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Connected components, ignoring edge direction.
    ///
    /// Each component is sorted ascending and components are ordered by
    /// their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut sets = DisjointSet::new(self.order());
        for &(u, v, _) in &self.edges {
            sets.union(u, v);
        }
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut order = Vec::new();
        for vertex in 0..self.order() {
            let Some(root) = sets.find(vertex) else {
                continue;
            };
            groups
                .entry(root)
                .or_insert_with(|| {
                    order.push(root);
                    Vec::new()
                })
                .push(vertex);
        }
        order
            .into_iter()
            .filter_map(|root| groups.remove(&root))
            .collect()
    }

    /// Directed graphs look for a back edge with three-colour DFS;
    /// undirected graphs for a non-tree edge that does not lead to the
    /// parent. Self-loops always count.
    pub fn has_cycle(&self) -> bool {
        if self.directed {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        }
    }

    fn has_directed_cycle(&self) -> bool {
        let mut color = vec![Color::White; self.order()];
        for root in 0..self.order() {
            if color[root] != Color::White {
                continue;
            }
            // (vertex, index of the next edge to explore)
            let mut stack = vec![(root, 0)];
            color[root] = Color::Gray;
            while let Some((vertex, next)) = stack.last_mut() {
                let Some(edge) = self.adjacency[*vertex].get(*next) else {
                    color[*vertex] = Color::Black;
                    stack.pop();
                    continue;
                };
                *next += 1;
                match color[edge.to] {
                    Color::Gray => {
                        debug!(from = *vertex, to = edge.to, "back edge");
                        return true;
                    }
                    Color::White => {
                        color[edge.to] = Color::Gray;
                        stack.push((edge.to, 0));
                    }
                    Color::Black => {}
                }
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut seen = vec![false; self.order()];
        for root in 0..self.order() {
            if seen[root] {
                continue;
            }
            seen[root] = true;
            let mut stack = vec![(root, None)];
            while let Some((vertex, parent)) = stack.pop() {
                for edge in &self.adjacency[vertex] {
                    if !seen[edge.to] {
                        seen[edge.to] = true;
                        stack.push((edge.to, Some(vertex)));
                    } else if Some(edge.to) != parent {
                        debug!(from = vertex, to = edge.to, "non-tree edge");
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Kahn's algorithm. Ready vertices are taken lowest index first.
    pub fn topological_sort(&self) -> Result<Vec<usize>> {
        let mut in_degree = vec![0usize; self.order()];
        for edges in &self.adjacency {
            for edge in edges {
                in_degree[edge.to] += 1;
            }
        }
        let mut ready: VecDeque<usize> = (0..self.order()).filter(|&v| in_degree[v] == 0).collect();
        let mut sorted = Vec::with_capacity(self.order());
        while let Some(vertex) = ready.pop_front() {
            sorted.push(vertex);
            for edge in &self.adjacency[vertex] {
                in_degree[edge.to] -= 1;
                if in_degree[edge.to] == 0 {
                    ready.push_back(edge.to);
                }
            }
        }
        if sorted.len() < self.order() {
            debug!(
                placed = sorted.len(),
                order = self.order(),
                "topological sort stalled"
            );
            return Err(AlgoError::CycleDetected);
        }
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(order: usize, edges: &[(usize, usize)]) -> Graph {
        let weighted: Vec<_> = edges.iter().map(|&(u, v)| (u, v, 1)).collect();
        Graph::from_edges(order, false, &weighted).unwrap()
    }

    fn directed(order: usize, edges: &[(usize, usize)]) -> Graph {
        let weighted: Vec<_> = edges.iter().map(|&(u, v)| (u, v, 1)).collect();
        Graph::from_edges(order, true, &weighted).unwrap()
    }

    #[test]
    fn test_bfs_and_dfs_order() {
        let graph = undirected(6, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)]);
        assert_eq!(graph.bfs(0), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.dfs(0), vec![0, 1, 3, 4, 2, 5]);
        assert!(graph.bfs(6).is_empty());
        assert_eq!(graph.dfs(5), vec![5, 2, 0, 1, 3, 4]);
    }

    #[test]
    fn test_directed_reachability() {
        let graph = directed(4, &[(0, 1), (1, 2), (3, 0)]);
        assert_eq!(graph.bfs(1), vec![1, 2]);
        assert_eq!(graph.dfs(3), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_shortest_path_unweighted() {
        let graph = undirected(6, &[(0, 1), (1, 2), (2, 3), (0, 4), (4, 3)]);
        assert_eq!(graph.shortest_path_unweighted(0, 3), Some(vec![0, 4, 3]));
        assert_eq!(graph.shortest_path_unweighted(2, 2), Some(vec![2]));
        assert_eq!(graph.shortest_path_unweighted(0, 5), None);
        assert_eq!(graph.shortest_path_unweighted(0, 9), None);
    }

    #[test]
    fn test_connected_components() {
        let graph = undirected(7, &[(3, 4), (0, 1), (5, 6), (1, 2)]);
        assert_eq!(
            graph.connected_components(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5, 6]]
        );
        let weak = directed(3, &[(2, 0)]);
        assert_eq!(weak.connected_components(), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_cycle_detection() {
        assert!(!undirected(4, &[(0, 1), (1, 2), (2, 3)]).has_cycle());
        assert!(undirected(3, &[(0, 1), (1, 2), (2, 0)]).has_cycle());
        assert!(undirected(2, &[(1, 1)]).has_cycle());

        assert!(!directed(3, &[(0, 1), (0, 2), (1, 2)]).has_cycle());
        assert!(directed(3, &[(0, 1), (1, 2), (2, 0)]).has_cycle());
        assert!(directed(1, &[(0, 0)]).has_cycle());
    }

    #[test]
    fn test_topological_sort() {
        let graph = directed(4, &[(3, 1), (1, 0), (2, 0)]);
        assert_eq!(graph.topological_sort(), Ok(vec![2, 3, 1, 0]));

        let cyclic = directed(3, &[(0, 1), (1, 2), (2, 1)]);
        assert_eq!(cyclic.topological_sort(), Err(AlgoError::CycleDetected));
        assert_eq!(directed(0, &[]).topological_sort(), Ok(vec![]));
    }
}
