//! Minimum spanning forest.

use super::Graph;
use crate::union_find::DisjointSet;
use tracing::trace;

impl Graph {
    /// Kruskal's algorithm over the edge list, treating every edge as
    /// undirected.
    ///
    /// Returns the total weight and the chosen edges in the order they were
    /// accepted. A disconnected graph yields a spanning forest. Among equal
    /// weights the earlier-added edge wins.
    pub fn kruskal_mst(&self) -> (i64, Vec<(usize, usize, i64)>) {
        let mut candidates = self.edges.clone();
        candidates.sort_by_key(|&(_, _, weight)| weight);

        let mut sets = DisjointSet::new(self.order());
        let mut total = 0i64;
        let mut chosen = Vec::with_capacity(self.order().saturating_sub(1));
        for (u, v, weight) in candidates {
            if sets.union(u, v) {
                trace!(u, v, weight, "spanning edge");
                total = total.saturating_add(weight);
                chosen.push((u, v, weight));
            }
            if chosen.len() + 1 == self.order() {
                break;
            }
        }
        (total, chosen)
    }
}
