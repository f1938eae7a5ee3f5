//! Single-source shortest paths over edge weights.

use super::Graph;
use crate::error::{AlgoError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace, warn};

impl Graph {
    /// Dijkstra with a binary heap and lazy deletion.
    ///
    /// Distances are `None` for unreachable vertices. Negative-weight edges
    /// are outside the algorithm's contract and are skipped.
    pub fn dijkstra(&self, source: usize) -> Vec<Option<u64>> {
        let mut dist: Vec<Option<u64>> = vec![None; self.order()];
        if source >= self.order() {
            return dist;
        }
        dist[source] = Some(0);
        let mut heap = BinaryHeap::from([Reverse((0u64, source))]);
        while let Some(Reverse((d, vertex))) = heap.pop() {
            if dist[vertex].is_some_and(|best| d > best) {
                continue;
            }
            for edge in &self.adjacency[vertex] {
                let Ok(weight) = u64::try_from(edge.weight) else {
                    warn!(
                        from = vertex,
                        to = edge.to,
                        weight = edge.weight,
                        "skipping negative edge"
                    );
                    continue;
                };
                let candidate = d.saturating_add(weight);
                if dist[edge.to].is_none_or(|current| candidate < current) {
                    trace!(from = vertex, to = edge.to, candidate, "relaxed");
                    dist[edge.to] = Some(candidate);
                    heap.push(Reverse((candidate, edge.to)));
                }
            }
        }
        dist
    }

    /// Bellman-Ford: `order - 1` rounds of relaxing every edge, then one
    /// more round that must change nothing.
    ///
    /// Fails with [`AlgoError::NegativeCycle`] when a negative cycle is
    /// reachable from `source`. An undirected negative edge is itself such a
    /// cycle.
    pub fn bellman_ford(&self, source: usize) -> Result<Vec<Option<i64>>> {
        let mut dist: Vec<Option<i64>> = vec![None; self.order()];
        if source >= self.order() {
            return Ok(dist);
        }
        dist[source] = Some(0);
        for round in 1..self.order() {
            if !self.relax_all(&mut dist) {
                debug!(round, "bellman-ford converged early");
                return Ok(dist);
            }
        }
        if self.relax_all(&mut dist) {
            return Err(AlgoError::NegativeCycle);
        }
        Ok(dist)
    }

    /// One pass over every edge. Returns whether any distance improved.
    fn relax_all(&self, dist: &mut [Option<i64>]) -> bool {
        let mut changed = false;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            let Some(d) = dist[vertex] else {
                continue;
            };
            for edge in edges {
                let candidate = d.saturating_add(edge.weight);
                if dist[edge.to].is_none_or(|current| candidate < current) {
                    dist[edge.to] = Some(candidate);
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra() {
        let graph = Graph::from_edges(
            5,
            true,
            &[(0, 1, 10), (0, 2, 3), (2, 1, 4), (1, 3, 2), (2, 3, 8)],
        )
        .unwrap();
        assert_eq!(
            graph.dijkstra(0),
            vec![Some(0), Some(7), Some(3), Some(9), None]
        );
        assert_eq!(graph.dijkstra(3), vec![None, None, None, Some(0), None]);
        assert_eq!(graph.dijkstra(8), vec![None; 5]);
    }

    #[test]
    fn test_bellman_ford_with_negative_edges() {
        let graph = Graph::from_edges(
            4,
            true,
            &[(0, 1, 4), (0, 2, 5), (1, 2, -3), (2, 3, 4)],
        )
        .unwrap();
        assert_eq!(
            graph.bellman_ford(0),
            Ok(vec![Some(0), Some(4), Some(1), Some(5)])
        );
    }

    #[test]
    fn test_negative_cycle() {
        let graph = Graph::from_edges(3, true, &[(0, 1, 1), (1, 2, -2), (2, 1, 1)]).unwrap();
        assert_eq!(graph.bellman_ford(0), Err(AlgoError::NegativeCycle));

        assert!(graph.bellman_ford(2).is_err());

        // Unreachable negative cycles do not matter.
        let detached = Graph::from_edges(3, true, &[(1, 2, -2), (2, 1, 1)]).unwrap();
        assert_eq!(detached.bellman_ford(0), Ok(vec![Some(0), None, None]));

        let undirected = Graph::from_edges(2, false, &[(0, 1, -1)]).unwrap();
        assert_eq!(undirected.bellman_ford(0), Err(AlgoError::NegativeCycle));
    }

    #[test]
    fn test_dijkstra_matches_bellman_ford() {
        let graph = Graph::from_edges(
            5,
            false,
            &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)],
        )
        .unwrap();
        let expected: Vec<Option<i64>> = graph
            .dijkstra(0)
            .into_iter()
            .map(|d| d.map(|d| d as i64))
            .collect();
        assert_eq!(graph.bellman_ford(0), Ok(expected));
    }
}
