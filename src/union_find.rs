//! Disjoint-set forest with path compression and union by rank.

use std::io::{self, Write};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set, or `None` if `x` is out of range.
    ///
    /// Every node on the walked path is re-pointed straight at the root.
    pub fn find(&mut self, x: usize) -> Option<usize> {
        if x >= self.parent.len() {
            return None;
        }
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        Some(root)
    }

    /// Merges the sets of `a` and `b`. Returns `false` if they were already
    /// joined or either is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }

        // Attach the shallower tree below the deeper one.
        let (child, root) = if self.rank[ra] < self.rank[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        if self.rank[ra] == self.rank[rb] {
            self.rank[root] += 1;
        }
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Size of the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> Option<usize> {
        let root = self.find(x)?;
        Some(self.size[root])
    }
}

/// Connected components of an undirected graph on `n` vertices.
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> usize {
    let mut sets = DisjointSet::new(n);
    for &(a, b) in edges {
        sets.union(a, b);
    }
    sets.component_count()
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let mut sets = DisjointSet::new(8);
    for (a, b) in [(0, 1), (1, 2), (3, 4), (5, 6), (6, 7)] {
        sets.union(a, b);
    }
    writeln!(out, "after unions (0,1) (1,2) (3,4) (5,6) (6,7):")?;
    writeln!(out, "  components:     {}", sets.component_count())?;
    writeln!(out, "  0 ~ 2:          {}", sets.connected(0, 2))?;
    writeln!(out, "  2 ~ 3:          {}", sets.connected(2, 3))?;
    writeln!(out, "  size of {{5}}:   {:?}", sets.component_size(5))?;
    writeln!(out, "  union(2, 3):    {}", sets.union(2, 3))?;
    writeln!(out, "  union(0, 4):    {}", sets.union(0, 4))?;
    writeln!(out, "  components:     {}", sets.component_count())?;
    writeln!(
        out,
        "components of 5 vertices with edges [(0,1), (1,2), (3,4)]: {}",
        count_components(5, &[(0, 1), (1, 2), (3, 4)])
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_find() {
        let mut sets = DisjointSet::new(6);
        assert_eq!(sets.component_count(), 6);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 2));
        assert!(sets.connected(0, 2));
        assert!(!sets.connected(0, 3));
        assert_eq!(sets.component_count(), 4);
        assert_eq!(sets.component_size(2), Some(3));
        assert_eq!(sets.component_size(5), Some(1));
    }

    #[test]
    fn test_out_of_range() {
        let mut sets = DisjointSet::new(2);
        assert_eq!(sets.find(2), None);
        assert!(!sets.union(0, 9));
        assert!(!sets.connected(0, 9));
        assert_eq!(sets.component_size(9), None);
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut sets = DisjointSet::new(5);
        for i in 0..4 {
            sets.union(i, i + 1);
        }
        let root = sets.find(4).unwrap();
        for i in 0..5 {
            assert_eq!(sets.find(i), Some(root));
            assert_eq!(sets.parent[i], root);
        }
    }

    #[test]
    fn test_count_components() {
        assert_eq!(count_components(5, &[(0, 1), (1, 2), (3, 4)]), 2);
        assert_eq!(count_components(3, &[]), 3);
        assert_eq!(count_components(0, &[]), 0);
    }
}
