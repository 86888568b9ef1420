/*!
# Weighted Edge Store

Pairs a read-only [`WeightedGraph`] with the one piece of mutable state the
engine owns directly: a per-edge-slot liveness bitset. An edge slot is
"dead" once it has contributed to the forest, or once both endpoints are
known to share a component. Marking a slot dead from one direction makes it
dead from both, by construction — callers only ever mark the direction they
discovered live.
*/

use std::sync::atomic::{AtomicU8, Ordering};

use crate::graph::{EdgeSlot, VertexId, WeightedGraph};

/// The weighted, symmetric graph plus its owned edge-liveness bitset.
pub struct EdgeStore<'g> {
    graph: &'g WeightedGraph,
    liveness: Vec<AtomicU8>,
}

impl<'g> EdgeStore<'g> {
    /// Builds a store over `graph` with every edge slot initially live.
    #[must_use]
    pub fn new(graph: &'g WeightedGraph) -> Self {
        let byte_count = graph.slot_count().div_ceil(8);
        let liveness = (0..byte_count).map(|_| AtomicU8::new(0)).collect();
        EdgeStore { graph, liveness }
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &'g WeightedGraph {
        self.graph
    }

    /// `v`'s neighbor slots and the global edge index of the first slot,
    /// for range iteration starting at an arbitrary cursor position.
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> (&[EdgeSlot], usize) {
        (self.graph.neighbors(v), self.graph.start_offset(v))
    }

    /// Relaxed read of whether edge slot `edge_index` is still live.
    #[must_use]
    pub fn is_live(&self, edge_index: usize) -> bool {
        let (byte, mask) = Self::locate(edge_index);
        self.liveness[byte].load(Ordering::Relaxed) & mask == 0
    }

    /// Idempotent atomic OR marking edge slot `edge_index` dead.
    pub fn mark_dead(&self, edge_index: usize) {
        let (byte, mask) = Self::locate(edge_index);
        self.liveness[byte].fetch_or(mask, Ordering::Relaxed);
    }

    /// Marks the edge at global index `forward_index` dead, plus the
    /// matching slot in the reverse direction found by scanning `v`'s
    /// neighbor list for a slot back to `u` with the same `weight`. Both
    /// directions must be marked dead together per the data model's
    /// liveness invariant.
    ///
    /// The weight check matters because `builder.rs` allows parallel edges
    /// between the same pair: without it, a reverse scan keyed on neighbor
    /// alone could dead-mark an unrelated parallel `u-v` slot of a different
    /// weight, leaving the actually-selected edge's reverse direction live.
    pub fn mark_dead_both_directions(&self, u: VertexId, v: VertexId, weight: u32, forward_index: usize) {
        self.mark_dead(forward_index);
        let (slots, start) = self.neighbors(v);
        if let Some(pos) = slots
            .iter()
            .position(|s| s.neighbor.index() == u.index() && s.weight == weight)
        {
            self.mark_dead(start + pos);
        }
    }

    fn locate(edge_index: usize) -> (usize, u8) {
        (edge_index / 8, 1u8 << (edge_index % 8))
    }
}
