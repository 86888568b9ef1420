//! Serial Prim's-algorithm oracle, used by `--compare-prim` to cross-check
//! the parallel engine's total weight against an independent, trusted
//! single-threaded implementation. Grounded on the teacher's own
//! `graphina::core::mst::prim_mst`, adapted to operate directly on
//! `mastiff-core`'s CSR [`WeightedGraph`] rather than the teacher's
//! adjacency-list `BaseGraph`, and to compute a forest (one tree per
//! connected component) rather than assume connectivity.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mastiff_core::{VertexId, WeightedGraph};

/// Computes a minimum spanning forest serially with Prim's algorithm,
/// starting a new tree at each not-yet-visited vertex so disconnected
/// graphs are still fully covered.
#[must_use]
pub fn prim_forest(graph: &WeightedGraph) -> (Vec<(VertexId, VertexId, u32)>, u64) {
    let n = graph.node_count();
    let mut in_tree = vec![false; n];
    let mut edges = Vec::new();
    let mut total_weight: u64 = 0;

    for start in 0..n {
        if in_tree[start] || graph.neighbors(VertexId(start as u32)).is_empty() {
            continue;
        }
        in_tree[start] = true;
        let mut heap = BinaryHeap::new();
        push_frontier(graph, VertexId(start as u32), &in_tree, &mut heap);

        while let Some(Reverse((w, from, to))) = heap.pop() {
            if in_tree[to.index()] {
                continue;
            }
            in_tree[to.index()] = true;
            edges.push((from, to, w));
            total_weight += u64::from(w);
            push_frontier(graph, to, &in_tree, &mut heap);
        }
    }

    (edges, total_weight)
}

fn push_frontier(
    graph: &WeightedGraph,
    from: VertexId,
    in_tree: &[bool],
    heap: &mut BinaryHeap<Reverse<(u32, VertexId, VertexId)>>,
) {
    for slot in graph.neighbors(from) {
        if !in_tree[slot.neighbor.index()] {
            heap.push(Reverse((slot.weight, from, slot.neighbor)));
        }
    }
}
