/*!
# Contraction Engine

Consumes one round's [`Candidate`](crate::selector::Candidate) array and
commits it: for every component that found a candidate, attempts to union
its two endpoints. The union-find call is the arbiter — when two
components both nominate the same logical edge (one from each side), only
the thread whose `union` call actually installs the link appends that edge
to the forest and marks both directions dead. The loser's `union` call
returns `false` and it does nothing further.
*/

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use rayon::prelude::*;

use crate::graph::VertexId;
use crate::edge_store::EdgeStore;
use crate::selector::Candidate;
use crate::union_find::ConcurrentUnionFind;

/// One edge committed to the forest this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: u32,
}

/// A preallocated, write-once-per-slot accumulator: winners claim a slot by
/// an atomic fetch-add on `next`, then write it exactly once via
/// `OnceLock::set`. This realizes the "single atomic fetch-add" resource
/// discipline for the commit step without any unsafe code.
struct RoundAccumulator {
    slots: Vec<OnceLock<ForestEdge>>,
    next: AtomicUsize,
}

impl RoundAccumulator {
    fn with_capacity(capacity: usize) -> Self {
        RoundAccumulator {
            slots: (0..capacity).map(|_| OnceLock::new()).collect(),
            next: AtomicUsize::new(0),
        }
    }

    fn push(&self, edge: ForestEdge) {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.slots[index]
            .set(edge)
            .expect("each accumulator slot is claimed by exactly one winner");
    }

    fn into_edges(self) -> Vec<ForestEdge> {
        let filled = self.next.load(Ordering::Relaxed).min(self.slots.len());
        self.slots
            .into_iter()
            .take(filled)
            .map(|slot| slot.into_inner().expect("claimed slots are always written"))
            .collect()
    }
}

/// Applies every candidate from one round, returning the edges that were
/// actually added to the forest (a subset of `candidates`, since duplicate
/// proposals for the same underlying edge collapse to one winner).
///
/// At most `candidates.len()` edges can be committed in a single round (one
/// per still-active component), which bounds the accumulator's capacity.
pub fn contract_round(
    store: &EdgeStore<'_>,
    uf: &ConcurrentUnionFind,
    candidates: &[Option<Candidate>],
) -> Vec<ForestEdge> {
    let accumulator = RoundAccumulator::with_capacity(candidates.len());

    candidates.par_iter().for_each(|candidate| {
        let Some(candidate) = *candidate else { return };
        if uf.union(candidate.u.0, candidate.v.0) {
            store.mark_dead_both_directions(candidate.u, candidate.v, candidate.weight, candidate.edge_index);
            accumulator.push(ForestEdge {
                u: candidate.u,
                v: candidate.v,
                weight: candidate.weight,
            });
        }
    });

    accumulator.into_edges()
}
