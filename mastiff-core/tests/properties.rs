/*!
# Property-Based Tests for the MSF Engine

Exercises properties P1–P8 from the MASTIFF specification against
randomly generated graphs: weight optimality against a serial Prim
oracle, the forest and spanning properties, edge membership and count,
determinism of total weight across thread counts, and the two
union-find invariants (idempotence of `find`, monotonicity once merged).
*/

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mastiff_core::builder::from_edge_list;
use mastiff_core::union_find::ConcurrentUnionFind;
use mastiff_core::{compute_msf, MsfConfig, VertexId, WeightedGraph};
use proptest::prelude::*;

/// A serial Prim oracle, independent of the engine under test, used only
/// by these property tests to establish a trusted baseline for P1.
fn prim_forest_weight(graph: &WeightedGraph) -> (u64, usize) {
    let n = graph.node_count();
    let mut in_tree = vec![false; n];
    let mut total_weight = 0u64;
    let mut edge_count = 0usize;
    let mut components = 0usize;

    for start in 0..n {
        if in_tree[start] {
            continue;
        }
        components += 1;
        in_tree[start] = true;
        let mut heap = BinaryHeap::new();
        for slot in graph.neighbors(VertexId(start as u32)) {
            heap.push(Reverse((slot.weight, slot.neighbor)));
        }
        while let Some(Reverse((w, to))) = heap.pop() {
            if in_tree[to.index()] {
                continue;
            }
            in_tree[to.index()] = true;
            total_weight += u64::from(w);
            edge_count += 1;
            for slot in graph.neighbors(to) {
                if !in_tree[slot.neighbor.index()] {
                    heap.push(Reverse((slot.weight, slot.neighbor)));
                }
            }
        }
    }
    (total_weight, components)
}

/// A connected graph strategy: a random spanning path (guaranteeing
/// connectivity) plus a bounded number of random extra chords, all with
/// small positive integer weights.
fn connected_graph() -> impl Strategy<Value = WeightedGraph> {
    (3usize..20).prop_flat_map(|n| {
        let path_weights = prop::collection::vec(1u32..50, n - 1);
        let extra_count = 0usize..(n * 2);
        (Just(n), path_weights, extra_count).prop_flat_map(|(n, path_weights, extra_count)| {
            let extras = prop::collection::vec((0..n, 0..n, 1u32..50), extra_count);
            (Just(n), Just(path_weights), extras)
        })
    }).prop_map(|(n, path_weights, extras)| {
        let mut triples: Vec<(u32, u32, u32)> = (1..n)
            .map(|v| ((v - 1) as u32, v as u32, path_weights[v - 1]))
            .collect();
        for (u, v, w) in extras {
            if u != v {
                triples.push((u as u32, v as u32, w));
            }
        }
        from_edge_list(n, &triples).expect("generated graph must satisfy invariants")
    })
}

proptest! {
    /// P1: weight optimality against a serial Prim oracle.
    #[test]
    fn p1_weight_optimality_matches_prim(graph in connected_graph()) {
        let config = MsfConfig { threads: 4, partitions_per_thread: 2, validate: false };
        let msf = compute_msf(&graph, &config).expect("compute_msf must succeed");
        let (prim_weight, _) = prim_forest_weight(&graph);
        prop_assert_eq!(msf.total_weight, prim_weight);
    }

    /// P2 + P5: the result is an acyclic forest with exactly
    /// n - components(G) edges.
    #[test]
    fn p2_p5_forest_with_correct_edge_count(graph in connected_graph()) {
        let config = MsfConfig { threads: 3, partitions_per_thread: 3, validate: true };
        let msf = compute_msf(&graph, &config).expect("compute_msf must succeed");
        let (_, components) = prim_forest_weight(&graph);
        prop_assert_eq!(msf.edges.len(), graph.node_count() - components);
        prop_assert!(mastiff_core::validate::validate(&graph, &msf));
    }

    /// P4: every emitted edge corresponds to a real edge slot of the same weight.
    #[test]
    fn p4_every_edge_is_a_real_edge_slot(graph in connected_graph()) {
        let config = MsfConfig::default();
        let msf = compute_msf(&graph, &config).expect("compute_msf must succeed");
        for (u, v, w) in &msf.edges {
            let exists = graph.neighbors(*u).iter().any(|slot| slot.neighbor == *v && slot.weight == *w);
            prop_assert!(exists);
        }
    }

    /// P6: total weight is invariant across different thread counts on the
    /// same input.
    #[test]
    fn p6_total_weight_is_invariant_across_thread_counts(graph in connected_graph()) {
        let one = compute_msf(&graph, &MsfConfig { threads: 1, partitions_per_thread: 2, validate: false })
            .expect("compute_msf must succeed with 1 thread");
        let many = compute_msf(&graph, &MsfConfig { threads: 8, partitions_per_thread: 2, validate: false })
            .expect("compute_msf must succeed with 8 threads");
        prop_assert_eq!(one.total_weight, many.total_weight);
    }
}

#[test]
fn p7_find_is_idempotent_after_termination() {
    let uf = ConcurrentUnionFind::new(50);
    for i in 0..49u32 {
        uf.union(i, i + 1);
    }
    for v in 0..50u32 {
        let root = uf.find(v);
        assert_eq!(uf.find(root), root);
    }
}

#[test]
fn p8_union_find_is_monotonic_once_merged() {
    let uf = ConcurrentUnionFind::new(10);
    uf.union(0, 1);
    assert_eq!(uf.find(0), uf.find(1));
    // Further unrelated unions must never un-merge an existing pair.
    uf.union(5, 6);
    uf.union(2, 3);
    uf.union(1, 2);
    assert_eq!(uf.find(0), uf.find(1));
    assert_eq!(uf.find(0), uf.find(2));
    assert_eq!(uf.find(0), uf.find(3));
}
