/*!
# MSF Result & Validator

[`MsfResult`] is the engine's external-facing output: the forest's edges
plus their total weight. [`validate`] is an independent, serial check that
a computed forest is internally consistent — every edge exists in the
source graph, the edge set is acyclic, and every non-isolated vertex is
covered — used as an optional post-computation sanity pass, not as part of
the hot path.
*/

use crate::contraction::ForestEdge;
use crate::graph::{VertexId, WeightedGraph};

/// The minimum spanning forest computed for a graph: its edges (as
/// `(u, v, weight)` triples) and their summed weight.
#[derive(Debug, Clone, Default)]
pub struct MsfResult {
    pub edges: Vec<(VertexId, VertexId, u32)>,
    pub total_weight: u64,
}

impl MsfResult {
    pub(crate) fn from_forest_edges(edges: Vec<ForestEdge>) -> Self {
        let total_weight = edges.iter().map(|e| u64::from(e.weight)).sum();
        let edges = edges.into_iter().map(|e| (e.u, e.v, e.weight)).collect();
        MsfResult { edges, total_weight }
    }
}

/// Validates a computed forest against its source graph: every edge must
/// be a real edge of `graph`, the edge set must be acyclic, and every
/// vertex with at least one incident edge in `graph` must be covered by
/// some edge in the forest (a minimum spanning *forest* spans every
/// component, not just the component of an arbitrary root).
#[must_use]
pub fn validate(graph: &WeightedGraph, msf: &MsfResult) -> bool {
    edges_exist_in_graph(graph, msf) && is_acyclic(graph.node_count(), msf) && covers_every_connected_vertex(graph, msf)
}

fn edges_exist_in_graph(graph: &WeightedGraph, msf: &MsfResult) -> bool {
    msf.edges.iter().all(|&(u, v, w)| {
        graph
            .neighbors(u)
            .iter()
            .any(|slot| slot.neighbor == v && slot.weight == w)
    })
}

fn is_acyclic(n: usize, msf: &MsfResult) -> bool {
    // A plain serial union-find suffices here: this runs once, off the hot
    // path, purely to confirm the forest property of the result.
    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut v: usize) -> usize {
        while parent[v] != v {
            parent[v] = parent[parent[v]];
            v = parent[v];
        }
        v
    }
    for &(u, v, _) in &msf.edges {
        let ru = find(&mut parent, u.index());
        let rv = find(&mut parent, v.index());
        if ru == rv {
            return false;
        }
        parent[ru] = rv;
    }
    true
}

fn covers_every_connected_vertex(graph: &WeightedGraph, msf: &MsfResult) -> bool {
    let mut covered = vec![false; graph.node_count()];
    for &(u, v, _) in &msf.edges {
        covered[u.index()] = true;
        covered[v.index()] = true;
    }
    (0..graph.node_count()).all(|v| graph.neighbors(VertexId(v as u32)).is_empty() || covered[v])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeSlot;

    fn path_of_three() -> WeightedGraph {
        // 0 -(1)- 1 -(1)- 2, a simple path.
        let offsets = vec![0, 1, 3, 4];
        let edges = vec![
            EdgeSlot { neighbor: VertexId(1), weight: 1 },
            EdgeSlot { neighbor: VertexId(0), weight: 1 },
            EdgeSlot { neighbor: VertexId(2), weight: 1 },
            EdgeSlot { neighbor: VertexId(1), weight: 1 },
        ];
        WeightedGraph::from_csr(offsets, edges).expect("valid path")
    }

    #[test]
    fn a_correct_spanning_tree_validates() {
        let g = path_of_three();
        let msf = MsfResult {
            edges: vec![(VertexId(0), VertexId(1), 1), (VertexId(1), VertexId(2), 1)],
            total_weight: 2,
        };
        assert!(validate(&g, &msf));
    }

    #[test]
    fn a_cycle_fails_validation() {
        let g = path_of_three();
        let msf = MsfResult {
            edges: vec![
                (VertexId(0), VertexId(1), 1),
                (VertexId(1), VertexId(2), 1),
                (VertexId(2), VertexId(1), 1),
            ],
            total_weight: 3,
        };
        assert!(!validate(&g, &msf));
    }

    #[test]
    fn a_missing_vertex_fails_validation() {
        let g = path_of_three();
        let msf = MsfResult {
            edges: vec![(VertexId(0), VertexId(1), 1)],
            total_weight: 1,
        };
        assert!(!validate(&g, &msf));
    }

    #[test]
    fn an_edge_not_in_the_graph_fails_validation() {
        let g = path_of_three();
        let msf = MsfResult {
            edges: vec![(VertexId(0), VertexId(2), 1), (VertexId(1), VertexId(2), 1)],
            total_weight: 2,
        };
        assert!(!validate(&g, &msf));
    }
}
