/*!
# Weighted Graph Data Model

Defines the CSR representation the MASTIFF engine consumes: `offsets` index
into a flat `edges` array of `{neighbor, weight}` slots. The graph is
immutable once constructed — populating it (from a file, a generator, or a
symmetrization pass) is explicitly the job of an external collaborator, not
this crate. See [`crate::builder`] for a minimal in-memory constructor used
by tests.
*/

use crate::error::{MastiffError, Result};

/// A vertex identifier, `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the raw `u32` value.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(value: u32) -> Self {
        VertexId(value)
    }
}

/// One directed edge slot: a neighbor vertex and the edge's weight.
///
/// Exactly two 32-bit words, matching the wire-level invariant from the
/// data model: every edge occupies two `u32`s regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct EdgeSlot {
    pub neighbor: VertexId,
    pub weight: u32,
}

/// An immutable-layout, undirected, symmetric, positively-weighted CSR graph.
///
/// `offsets[v]..offsets[v + 1]` indexes into `edges` for vertex `v`'s
/// neighbor list. `offsets` has length `n + 1`; `edges` has length `2m`.
pub struct WeightedGraph {
    offsets: Vec<u64>,
    edges: Vec<EdgeSlot>,
}

impl WeightedGraph {
    /// Constructs a graph from raw CSR arrays, checking the invariants the
    /// engine relies on: monotonic offsets, `offsets[n] == edges.len()`,
    /// sorted neighbor lists, strictly positive weights, and symmetry.
    ///
    /// This is the one validation boundary between "whatever the external
    /// loader produced" and the engine; everything downstream trusts these
    /// invariants and does not re-check them.
    pub fn from_csr(offsets: Vec<u64>, edges: Vec<EdgeSlot>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(MastiffError::invariant_violated(
                "offsets non-empty",
                "offsets array must contain at least one entry (n + 1)",
            ));
        }
        let n = offsets.len() - 1;
        for w in offsets.windows(2) {
            if w[0] > w[1] {
                return Err(MastiffError::invariant_violated(
                    "offsets monotonic",
                    format!("offsets regressed: {} > {}", w[0], w[1]),
                ));
            }
        }
        if offsets[n] as usize != edges.len() {
            return Err(MastiffError::invariant_violated(
                "offsets[n] == edges.len()",
                format!("offsets[n]={} but edges.len()={}", offsets[n], edges.len()),
            ));
        }

        for v in 0..n {
            let start = offsets[v] as usize;
            let end = offsets[v + 1] as usize;
            let mut prev: Option<u32> = None;
            for slot in &edges[start..end] {
                if slot.weight == 0 {
                    return Err(MastiffError::invariant_violated(
                        "positive weight",
                        format!("vertex {v} has a zero-weight edge to {}", slot.neighbor.0),
                    ));
                }
                if slot.neighbor.0 as usize == v {
                    return Err(MastiffError::invariant_violated(
                        "no self-loops",
                        format!("vertex {v} has a self-loop"),
                    ));
                }
                if let Some(p) = prev {
                    if p > slot.neighbor.0 {
                        return Err(MastiffError::invariant_violated(
                            "sorted adjacency",
                            format!("vertex {v}'s neighbor list is not sorted by neighbor id"),
                        ));
                    }
                }
                prev = Some(slot.neighbor.0);
            }
        }

        let graph = WeightedGraph { offsets, edges };
        graph.check_symmetry()?;
        Ok(graph)
    }

    fn check_symmetry(&self) -> Result<()> {
        let n = self.node_count();
        for u in 0..n {
            for slot in self.neighbors(VertexId(u as u32)) {
                let v = slot.neighbor.index();
                let found = self
                    .neighbors(slot.neighbor)
                    .iter()
                    .any(|back| back.neighbor.index() == u && back.weight == slot.weight);
                if !found {
                    return Err(MastiffError::invariant_violated(
                        "symmetry",
                        format!("edge ({u},{v},w={}) has no matching reverse slot", slot.weight),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Number of vertices, `n`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed edge slots, `2m`.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `v`'s neighbor slots and the starting offset of that range
    /// within the flat `edges` array (the offset doubles as each slot's
    /// global edge index, `start_offset + i`).
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> &[EdgeSlot] {
        let start = self.offsets[v.index()] as usize;
        let end = self.offsets[v.index() + 1] as usize;
        &self.edges[start..end]
    }

    /// Starting offset of `v`'s neighbor range — also the global edge index
    /// of the first slot in that range.
    #[must_use]
    pub fn start_offset(&self, v: VertexId) -> usize {
        self.offsets[v.index()] as usize
    }

    /// Raw offsets array, exposed read-only for the partitioner.
    #[must_use]
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Raw edge slots, exposed read-only for direct indexing by edge id.
    #[must_use]
    pub fn edges(&self) -> &[EdgeSlot] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(neighbor: u32, weight: u32) -> EdgeSlot {
        EdgeSlot {
            neighbor: VertexId(neighbor),
            weight,
        }
    }

    #[test]
    fn single_edge_round_trips() {
        let offsets = vec![0, 1, 2];
        let edges = vec![slot(1, 7), slot(0, 7)];
        let g = WeightedGraph::from_csr(offsets, edges).expect("valid graph");
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.slot_count(), 2);
        assert_eq!(g.neighbors(VertexId(0))[0].weight, 7);
    }

    #[test]
    fn rejects_asymmetric_input() {
        let offsets = vec![0, 1, 1];
        let edges = vec![slot(1, 7)];
        let err = WeightedGraph::from_csr(offsets, edges).unwrap_err();
        assert!(matches!(
            err,
            MastiffError::InputInvariantViolated { invariant: "symmetry", .. }
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let offsets = vec![0, 1];
        let edges = vec![slot(0, 1)];
        let err = WeightedGraph::from_csr(offsets, edges).unwrap_err();
        assert!(matches!(
            err,
            MastiffError::InputInvariantViolated { invariant: "no self-loops", .. }
        ));
    }

    #[test]
    fn rejects_zero_weight() {
        let offsets = vec![0, 1, 2];
        let edges = vec![slot(1, 0), slot(0, 0)];
        let err = WeightedGraph::from_csr(offsets, edges).unwrap_err();
        assert!(matches!(
            err,
            MastiffError::InputInvariantViolated { invariant: "positive weight", .. }
        ));
    }

    #[test]
    fn rejects_unsorted_adjacency() {
        let offsets = vec![0, 2, 3, 4];
        let edges = vec![slot(2, 1), slot(1, 1), slot(0, 1), slot(0, 1)];
        let err = WeightedGraph::from_csr(offsets, edges).unwrap_err();
        assert!(matches!(
            err,
            MastiffError::InputInvariantViolated { invariant: "sorted adjacency", .. }
        ));
    }
}
