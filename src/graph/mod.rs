//! Weighted adjacency-list graphs and the classic algorithms over them.
//!
//! Vertices are the indices `0..order`. Each vertex keeps its outgoing
//! edges in insertion order, and every traversal visits neighbours in that
//! order, so results are deterministic. An undirected edge is stored once
//! in each endpoint's list.

mod mst;
mod shortest_path;
mod traversal;

use crate::error::{AlgoError, Result};
use std::io::{self, Write};
use tracing::{instrument, trace};

/// Outgoing half of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: i64,
}

#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    /// Every edge as added, `(from, to, weight)`.
    edges: Vec<(usize, usize, i64)>,
    directed: bool,
}

impl Graph {
    pub fn new_directed(order: usize) -> Self {
        Self::with_order(order, true)
    }

    pub fn new_undirected(order: usize) -> Self {
        Self::with_order(order, false)
    }

    fn with_order(order: usize, directed: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); order],
            edges: Vec::new(),
            directed,
        }
    }

    /// Builds a graph from an edge list, failing on the first bad endpoint.
    pub fn from_edges(order: usize, directed: bool, edges: &[(usize, usize, i64)]) -> Result<Self> {
        let mut graph = Self::with_order(order, directed);
        for &(u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<()> {
        let order = self.order();
        if let Some(vertex) = [u, v].into_iter().find(|&x| x >= order) {
            return Err(AlgoError::VertexOutOfRange { vertex, order });
        }
        trace!(u, v, weight, "adding edge");
        self.adjacency[u].push(Edge { to: v, weight });
        if !self.directed && u != v {
            self.adjacency[v].push(Edge { to: u, weight });
        }
        self.edges.push((u, v, weight));
        Ok(())
    }

    /// Outgoing edges of `vertex`; empty when out of range.
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    pub fn edges(&self) -> &[(usize, usize, i64)] {
        &self.edges
    }
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let road_map = [
        (0, 1, 4),
        (0, 2, 1),
        (2, 1, 2),
        (1, 3, 1),
        (2, 3, 5),
        (3, 4, 3),
    ];
    let graph = match Graph::from_edges(6, false, &road_map) {
        Ok(graph) => graph,
        Err(e) => return writeln!(out, "cannot build graph: {e}"),
    };
    writeln!(out, "undirected edges: {road_map:?} (vertex 5 isolated)")?;
    writeln!(out, "BFS from 0:           {:?}", graph.bfs(0))?;
    writeln!(out, "DFS from 0:           {:?}", graph.dfs(0))?;
    writeln!(
        out,
        "fewest hops 0 -> 4:   {:?}",
        graph.shortest_path_unweighted(0, 4)
    )?;
    writeln!(
        out,
        "components:           {:?}",
        graph.connected_components()
    )?;
    writeln!(out, "has cycle:            {}", graph.has_cycle())?;
    writeln!(out, "dijkstra from 0:      {:?}", graph.dijkstra(0))?;
    let (total, tree) = graph.kruskal_mst();
    writeln!(
        out,
        "minimum spanning forest: weight {total}, edges {tree:?}"
    )?;

    let tasks = [(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)];
    let mut dag = match Graph::from_edges(6, true, &tasks) {
        Ok(graph) => graph,
        Err(e) => return writeln!(out, "cannot build graph: {e}"),
    };
    writeln!(out, "directed edges: {tasks:?}")?;
    match dag.topological_sort() {
        Ok(order) => writeln!(out, "topological order:    {order:?}")?,
        Err(e) => writeln!(out, "topological sort failed: {e}")?,
    }
    if let Err(e) = dag.add_edge(1, 5, 1) {
        writeln!(out, "add_edge failed: {e}")?;
    }
    match dag.topological_sort() {
        Ok(order) => writeln!(out, "after 1 -> 5:         {order:?}")?,
        Err(e) => writeln!(out, "after 1 -> 5:         {e}")?,
    }
    if let Err(e) = dag.add_edge(0, 9, 1) {
        writeln!(out, "add_edge(0, 9):       {e}")?;
    }

    let credit = [(0, 1, 4), (0, 2, 5), (1, 2, -3), (2, 3, 4)];
    match Graph::from_edges(4, true, &credit) {
        Ok(mut weighted) => {
            writeln!(out, "negative-weight edges: {credit:?}")?;
            match weighted.bellman_ford(0) {
                Ok(dist) => writeln!(out, "bellman-ford from 0:  {dist:?}")?,
                Err(e) => writeln!(out, "bellman-ford failed: {e}")?,
            }
            if let Err(e) = weighted.add_edge(3, 1, -2) {
                writeln!(out, "add_edge failed: {e}")?;
            }
            match weighted.bellman_ford(0) {
                Ok(dist) => writeln!(out, "after 3 -> 1 (-2):    {dist:?}")?,
                Err(e) => writeln!(out, "after 3 -> 1 (-2):    {e}")?,
            }
        }
        Err(e) => writeln!(out, "cannot build graph: {e}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_bounds() {
        let mut graph = Graph::new_directed(3);
        assert!(graph.add_edge(0, 2, 1).is_ok());
        assert_eq!(
            graph.add_edge(1, 3, 1),
            Err(AlgoError::VertexOutOfRange { vertex: 3, order: 3 })
        );
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(0), &[Edge { to: 2, weight: 1 }]);
        assert!(graph.neighbors(2).is_empty());
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn test_undirected_edges_are_mirrored() {
        let graph = Graph::from_edges(3, false, &[(0, 1, 7), (2, 2, 1)]).unwrap();
        assert_eq!(graph.neighbors(1), &[Edge { to: 0, weight: 7 }]);
        // Self-loops are stored once.
        assert_eq!(graph.neighbors(2).len(), 1);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_demonstrate_output() {
        let mut out = Vec::new();
        demonstrate(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("BFS from 0:           [0, 1, 2, 3, 4]"));
        assert!(text.contains("topological order:    [4, 5, 2, 0, 3, 1]"));
        assert!(
            text.contains("after 1 -> 5:         graph contains a cycle")
        );
        assert!(
            text.contains("bellman-ford from 0:  [Some(0), Some(4), Some(1), Some(5)]")
        );
    }
}
