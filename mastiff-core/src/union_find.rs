/*!
# Concurrent Union-Find

A lock-free, rank-weighted disjoint-set structure. `find` is iterative with
inline one-step path halving; `link` is a single `compare_exchange` on the
loser's parent slot, attempted only on roots; `union` retries `find`+`link`
until it succeeds or both endpoints already share a root.

No node ever holds a lock. A root, once dethroned by a successful `link`,
never becomes a root again — `link` only ever points a root at another root,
and once `parent[r] != r` that stays true forever (path compression only
ever replaces a pointer with an ancestor along the same path, so it cannot
resurrect a dethroned root as a root).
*/

use std::sync::atomic::{AtomicU32, Ordering};

/// Lock-free union-find over vertex ids `0..n`.
pub struct ConcurrentUnionFind {
    parent: Vec<AtomicU32>,
    rank: Vec<AtomicU32>,
}

impl ConcurrentUnionFind {
    /// Creates a union-find where every element starts as its own root.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let parent = (0..n).map(|i| AtomicU32::new(i as u32)).collect();
        let rank = (0..n).map(|_| AtomicU32::new(0)).collect();
        ConcurrentUnionFind { parent, rank }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Counts the current number of distinct components, by root. Serial
    /// and `O(n)`; meant for between-round telemetry, not the hot path.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut roots: Vec<u32> = (0..self.len() as u32).map(|v| self.find(v)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }

    /// Finds the root of `v`'s tree, compressing one step per hop along the
    /// way. Plain loads/stores suffice: a racing writer can only ever
    /// install a pointer to a still-valid ancestor, so a lost compression
    /// never produces a wrong answer, only a missed shortcut.
    pub fn find(&self, v: u32) -> u32 {
        let mut current = v;
        loop {
            let parent = self.parent[current as usize].load(Ordering::Relaxed);
            if parent == current {
                return current;
            }
            let grandparent = self.parent[parent as usize].load(Ordering::Relaxed);
            if grandparent != parent {
                self.parent[current as usize].store(grandparent, Ordering::Relaxed);
            }
            current = parent;
        }
    }

    /// Attempts to link two roots, ordering by `(rank, id)` so the result is
    /// independent of which thread calls it first. Must only be called with
    /// `a` and `b` that are currently roots; returns `true` if this call
    /// installed the link, `false` if a concurrent `link` beat it to the
    /// loser's parent slot (the caller must re-`find` and retry).
    fn link(&self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }
        let rank_a = self.rank[a as usize].load(Ordering::Relaxed);
        let rank_b = self.rank[b as usize].load(Ordering::Relaxed);

        let (winner, loser) = match rank_a.cmp(&rank_b) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => {
                if a < b {
                    (a, b)
                } else {
                    (b, a)
                }
            }
        };

        let installed = self.parent[loser as usize]
            .compare_exchange(loser, winner, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok();

        if installed && rank_a == rank_b {
            self.rank[winner as usize].fetch_add(1, Ordering::Relaxed);
        }
        installed
    }

    /// Unions the sets containing `u` and `v`. Retries `find` + `link` until
    /// a link is installed or the two already share a root. Returns `true`
    /// iff this call performed the merge.
    pub fn union(&self, u: u32, v: u32) -> bool {
        loop {
            let ru = self.find(u);
            let rv = self.find(v);
            if ru == rv {
                return false;
            }
            if self.link(ru, rv) {
                return true;
            }
        }
    }
}
