/*!
# Partitioner

Splits the vertex range `0..n` into `k = threads * partitions_per_thread`
contiguous ranges of approximately equal edge count, so that work-stealing
across partitions balances load even when degree is skewed. Partitions are
computed once, from `offsets`, and reused unchanged across rounds — the
dispatcher, not re-partitioning, is what absorbs per-round imbalance.
*/

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::VertexId;

/// A contiguous, half-open vertex range `[start, end)` assigned as one
/// schedulable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: u32,
    pub end: u32,
}

impl Partition {
    /// Vertices in this partition, in ascending id order.
    pub fn vertices(self) -> impl Iterator<Item = VertexId> {
        (self.start..self.end).map(VertexId)
    }
}

/// Fixed vertex-range boundaries computed once from the degree sequence.
pub struct Partitioner {
    partitions: Vec<Partition>,
}

impl Partitioner {
    /// Builds `threads * partitions_per_thread` partitions of approximately
    /// equal total degree (`Σ deg(v) ≈ offsets[n] / k` per partition), by a
    /// single greedy prefix-sum scan over `offsets`.
    #[must_use]
    pub fn build(offsets: &[u64], threads: usize, partitions_per_thread: usize) -> Self {
        let n = offsets.len().saturating_sub(1);
        let k = (threads.max(1) * partitions_per_thread.max(1)).min(n.max(1));
        if n == 0 || k == 0 {
            return Partitioner { partitions: Vec::new() };
        }

        let total_degree = offsets[n];
        let target = total_degree.max(1).div_ceil(k as u64);

        let mut partitions = Vec::with_capacity(k);
        let mut start: u32 = 0;
        let mut partition_start_offset = offsets[0];

        for v in 0..n {
            let accumulated = offsets[v + 1] - partition_start_offset;
            let is_last_vertex = v + 1 == n;
            let would_fill_remaining_partitions =
                partitions.len() + 1 == k && !is_last_vertex;
            if !would_fill_remaining_partitions
                && (accumulated >= target || is_last_vertex)
            {
                partitions.push(Partition {
                    start,
                    end: (v + 1) as u32,
                });
                start = (v + 1) as u32;
                partition_start_offset = offsets[v + 1];
            }
        }
        // Any remainder (can happen if the cap on partition count was hit
        // before the degree target) becomes the final partition.
        if (start as usize) < n {
            partitions.push(Partition { start, end: n as u32 });
        }

        Partitioner { partitions }
    }

    /// Number of partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// All partitions, in id order.
    #[must_use]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// A fresh dispatcher over this partition set, reset for a new round.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher {
            partitions: &self.partitions,
            cursor: AtomicUsize::new(0),
        }
    }
}

/// Hands out partition indices to requesting workers on demand. Exactly one
/// worker claims each partition per round; a worker that finishes its
/// current partition pulls the next untaken one.
pub struct Dispatcher<'p> {
    partitions: &'p [Partition],
    cursor: AtomicUsize,
}

impl Dispatcher<'_> {
    /// Claims the next unclaimed partition, or `None` once exhausted.
    pub fn next(&self) -> Option<Partition> {
        loop {
            let i = self.cursor.fetch_add(1, Ordering::Relaxed);
            if i >= self.partitions.len() {
                return None;
            }
            return Some(self.partitions[i]);
        }
    }
}
