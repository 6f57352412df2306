//! Property-based tests for sequencer invariants.
//!
//! The shuffle order must stay a permutation of the playlist indices
//! through every operation that touches it, and repeat-all traversal must
//! cycle with the playlist's period.

use std::collections::HashSet;

use aria_playback::{RepeatMode, Sequencer};
use proptest::prelude::*;

/// Order covers 0..len exactly once
fn assert_permutation(order: &[usize], len: usize) {
    let unique: HashSet<usize> = order.iter().copied().collect();
    assert_eq!(order.len(), len);
    assert_eq!(unique, (0..len).collect::<HashSet<_>>());
}

proptest! {
    #[test]
    fn shuffle_order_is_always_an_anchored_permutation(
        seed in any::<u64>(),
        len in 1usize..32,
        anchor_raw in 0usize..32,
    ) {
        let anchor = anchor_raw % len;
        let mut seq = Sequencer::with_seed(seed);
        seq.set_current(Some(anchor));
        seq.set_shuffle(true, len);

        prop_assert_eq!(seq.order()[0], anchor);
        prop_assert_eq!(seq.position(), 0);
        assert_permutation(seq.order(), len);
    }

    #[test]
    fn shuffled_traversal_visits_each_index_exactly_once(
        seed in any::<u64>(),
        len in 1usize..24,
    ) {
        let mut seq = Sequencer::with_seed(seed);
        seq.set_current(Some(0));
        seq.set_shuffle(true, len);

        let mut visited = vec![0usize];
        while let Some(next) = seq.next(len) {
            seq.set_current(Some(next));
            visited.push(next);
        }
        assert_permutation(&visited, len);
    }

    #[test]
    fn repeat_all_next_cycles_with_period_n(
        seed in any::<u64>(),
        len in 1usize..24,
        shuffle in any::<bool>(),
    ) {
        let mut seq = Sequencer::with_seed(seed);
        seq.set_current(Some(0));
        seq.set_repeat(RepeatMode::All);
        seq.set_shuffle(shuffle, len);

        let start = seq.current();
        for _ in 0..len {
            let next = seq.next(len);
            prop_assert!(next.is_some());
            seq.set_current(next);
        }
        // After exactly N advances we are back where we started.
        prop_assert_eq!(seq.current(), start);
    }

    #[test]
    fn removal_repair_preserves_the_permutation(
        seed in any::<u64>(),
        len in 2usize..24,
        removals in prop::collection::vec(any::<usize>(), 1..8),
    ) {
        let mut seq = Sequencer::with_seed(seed);
        seq.set_current(Some(0));
        seq.set_shuffle(true, len);

        let mut remaining = len;
        for raw in removals {
            if remaining == 0 {
                break;
            }
            let removed = raw % remaining;
            remaining -= 1;
            seq.on_track_removed(removed, remaining);

            assert_permutation(seq.order(), remaining);
            match seq.current() {
                Some(current) => {
                    prop_assert!(current < remaining);
                    prop_assert_eq!(seq.order()[seq.position()], current);
                }
                None => prop_assert_eq!(remaining, 0),
            }
        }
    }

    #[test]
    fn append_rebuild_preserves_the_permutation(
        seed in any::<u64>(),
        len in 1usize..16,
        added in 1usize..16,
    ) {
        let mut seq = Sequencer::with_seed(seed);
        let anchor = len / 2;
        seq.set_current(Some(anchor));
        seq.set_shuffle(true, len);

        seq.on_tracks_appended(len + added);

        prop_assert_eq!(seq.order()[0], anchor);
        prop_assert_eq!(seq.position(), 0);
        assert_permutation(seq.order(), len + added);
    }
}
