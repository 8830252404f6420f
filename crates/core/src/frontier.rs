use std::cmp::Ordering;

/// Composite ordering key for frontier entries: cumulative walking distance
/// from the start room, then negated cumulative probability sum.
///
/// Comparison is lexicographic over the two components using
/// `f64::total_cmp`, so the order is total even in the presence of NaN or
/// signed zeros. Lower distance wins; on an exact distance tie the larger
/// probability sum wins, because a larger sum is a more negative
/// `neg_probability`.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub total_distance: f64,
    pub neg_probability: f64,
}

impl FrontierKey {
    /// Zero-accumulator key seeding the start room.
    pub const START: FrontierKey = FrontierKey {
        total_distance: 0.0,
        neg_probability: 0.0,
    };

    /// Key after walking one more corridor: distance accumulates, probability
    /// accumulates negated.
    pub fn walk(&self, distance: f64, probability: f64) -> FrontierKey {
        FrontierKey {
            total_distance: self.total_distance + distance,
            neg_probability: self.neg_probability - probability,
        }
    }

    /// The raw probability sum along the path, negated back out of the key.
    pub fn probability_sum(&self) -> f64 {
        -self.neg_probability
    }
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_distance
            .total_cmp(&other.total_distance)
            .then_with(|| self.neg_probability.total_cmp(&other.neg_probability))
    }
}

/// A candidate path awaiting evaluation in the priority queue.
///
/// `seq` is a monotonically increasing push counter. Entries whose numeric
/// keys tie exactly resolve to the earlier push, which keeps the heap order
/// total and deterministic without ever comparing room identifiers.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N> {
    pub key: FrontierKey,
    pub seq: u64,
    pub room: N,
    pub from: Option<N>,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    fn entry(total_distance: f64, neg_probability: f64, seq: u64) -> FrontierEntry<&'static str> {
        FrontierEntry {
            key: FrontierKey {
                total_distance,
                neg_probability,
            },
            seq,
            room: "room",
            from: None,
        }
    }

    #[test]
    fn distance_orders_before_probability() {
        let near_unlikely = FrontierKey {
            total_distance: 1.0,
            neg_probability: -0.1,
        };
        let far_likely = FrontierKey {
            total_distance: 2.0,
            neg_probability: -0.9,
        };

        assert!(near_unlikely < far_likely);
    }

    #[test]
    fn probability_breaks_exact_distance_ties() {
        let likely = FrontierKey {
            total_distance: 2.0,
            neg_probability: -0.8,
        };
        let unlikely = FrontierKey {
            total_distance: 2.0,
            neg_probability: -0.6,
        };

        assert!(likely < unlikely);
    }

    #[test]
    fn seq_breaks_exact_key_ties() {
        let first = entry(2.0, -0.5, 3);
        let second = entry(2.0, -0.5, 7);

        assert!(first < second);
        assert_eq!(first.cmp(&first), Ordering::Equal);
    }

    #[test]
    fn walk_accumulates_distance_and_negates_probability() {
        let key = FrontierKey::START.walk(1.5, 0.3).walk(2.0, 0.4);

        assert_eq!(key.total_distance, 1.5 + 2.0);
        assert_eq!(key.neg_probability, -0.3 - 0.4);
        assert_eq!(key.probability_sum(), -(-0.3 - 0.4));
    }

    #[test]
    fn min_heap_pops_lowest_key_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry(3.0, -0.2, 0)));
        heap.push(Reverse(entry(1.0, -0.5, 1)));
        heap.push(Reverse(entry(1.0, -0.9, 2)));

        let Reverse(first) = heap.pop().expect("heap is non-empty");
        assert_eq!(first.seq, 2);
        let Reverse(second) = heap.pop().expect("heap is non-empty");
        assert_eq!(second.seq, 1);
        let Reverse(third) = heap.pop().expect("heap is non-empty");
        assert_eq!(third.seq, 0);
    }
}
