/*!
# In-Memory Graph Builder

A minimal constructor that turns a list of undirected `(u, v, weight)`
triples into a [`WeightedGraph`], for use by tests and benchmarks. This is
deliberately not a general ingestion path — reading graphs from files,
generating them, or symmetrizing asymmetric input is explicitly out of
scope for the core; see `mastiff-cli` for that.
*/

use crate::error::Result;
use crate::graph::{EdgeSlot, VertexId, WeightedGraph};

/// Builds a [`WeightedGraph`] over `n` vertices from a list of undirected
/// edges. Each input triple produces both directed slots; duplicate edges
/// between the same pair are allowed at this layer (the graph's own
/// invariant checks only require sortedness and symmetry, not simplicity),
/// but in practice callers should pass a simple graph.
pub fn from_edge_list(n: usize, triples: &[(u32, u32, u32)]) -> Result<WeightedGraph> {
    let mut adjacency: Vec<Vec<EdgeSlot>> = vec![Vec::new(); n];
    for &(u, v, w) in triples {
        adjacency[u as usize].push(EdgeSlot { neighbor: VertexId(v), weight: w });
        adjacency[v as usize].push(EdgeSlot { neighbor: VertexId(u), weight: w });
    }
    for slots in &mut adjacency {
        slots.sort_by_key(|slot| slot.neighbor.0);
    }

    let mut offsets = Vec::with_capacity(n + 1);
    let mut edges = Vec::new();
    offsets.push(0u64);
    for slots in adjacency {
        edges.extend(slots);
        offsets.push(edges.len() as u64);
    }

    WeightedGraph::from_csr(offsets, edges)
}
