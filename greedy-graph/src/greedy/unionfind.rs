use crate::error::{check_vertex, GraphError};

/// Union-find (disjoint-set) over `0..len` with path compression and union by rank.
///
/// Every element starts as its own singleton set.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Canonical root of the set containing `v`.
    ///
    /// Walks to the root, then walks the same chain again pointing every
    /// visited node directly at the root.
    pub fn find(&mut self, v: usize) -> Result<usize, GraphError> {
        check_vertex(v, self.len())?;

        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = v;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` without mutation if they are already in the same set.
    /// The lower-rank root goes under the higher-rank root; on a tie `b`'s
    /// root goes under `a`'s and `a`'s rank grows by one.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        check_vertex(b, self.len())?;
        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return Ok(false);
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        Ok(true)
    }

    /// Whether `a` and `b` belong to the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        check_vertex(b, self.len())?;
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Rank of `v`'s entry. Only meaningful for roots.
    pub fn rank(&self, v: usize) -> Result<u32, GraphError> {
        check_vertex(v, self.len())?;
        Ok(self.rank[v])
    }
}
