// SPDX-License-Identifier: MPL-2.0
//! Candle placement and lighting order.
//!
//! Candles are *placed* filling from the right (the first night's candle sits
//! on the rightmost branch) but *lit* from the left, newest candle first.
//! The lighter candle always goes first.
//!
//! ```text
//! slot:   0  1  2  3  [4]  5  6  7  8
//! rank:   8  7  6  5   -   4  3  2  1
//! ```

use super::newtypes::{bounds, Day, SlotIndex};

/// Maps a 1-based rank (the n-th candle added) to its physical slot,
/// skipping the lighter branch once the right half is full.
fn slot_for_rank(rank: u8) -> SlotIndex {
    let last = bounds::SLOT_COUNT as u8;
    let index = if rank <= bounds::LIGHTER_SLOT {
        last - rank
    } else {
        last - rank - 1
    };
    SlotIndex::ALL[usize::from(index)]
}

/// Returns the count slots holding a candle on `day`, in rank order.
///
/// The lighter slot is never included; it is always occupied and tracked
/// separately. The result has exactly `day` entries and grows monotonically:
/// night `d` is night `d - 1` plus one new slot.
#[must_use]
pub fn occupied_slots(day: Day) -> Vec<SlotIndex> {
    (1..=day.get()).map(slot_for_rank).collect()
}

/// Returns the ignition sequence for `day`.
///
/// The lighter slot comes first, followed by the occupied count slots from
/// left to right.
#[must_use]
pub fn lighting_order(day: Day) -> Vec<SlotIndex> {
    let mut count_slots = occupied_slots(day);
    count_slots.sort_unstable();

    let mut order = Vec::with_capacity(count_slots.len() + 1);
    order.push(SlotIndex::LIGHTER);
    order.extend(count_slots);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn indices(slots: &[SlotIndex]) -> Vec<usize> {
        slots.iter().map(|slot| slot.get()).collect()
    }

    fn day(value: u8) -> Day {
        Day::new(value).expect("valid day")
    }

    #[test]
    fn occupied_slots_match_reference_table() {
        let expected: [&[usize]; 8] = [
            &[8],
            &[7, 8],
            &[6, 7, 8],
            &[5, 6, 7, 8],
            &[3, 5, 6, 7, 8],
            &[2, 3, 5, 6, 7, 8],
            &[1, 2, 3, 5, 6, 7, 8],
            &[0, 1, 2, 3, 5, 6, 7, 8],
        ];
        for (d, want) in Day::ALL.into_iter().zip(expected) {
            let got: BTreeSet<usize> = indices(&occupied_slots(d)).into_iter().collect();
            let want: BTreeSet<usize> = want.iter().copied().collect();
            assert_eq!(got, want, "night {d}");
        }
    }

    #[test]
    fn occupied_slots_size_and_lighter_exclusion() {
        for d in Day::ALL {
            let slots = occupied_slots(d);
            assert_eq!(slots.len(), d.count());
            assert!(!slots.contains(&SlotIndex::LIGHTER));
        }
    }

    #[test]
    fn occupied_slots_grow_by_one_each_night() {
        for pair in Day::ALL.windows(2) {
            let before: BTreeSet<_> = occupied_slots(pair[0]).into_iter().collect();
            let after: BTreeSet<_> = occupied_slots(pair[1]).into_iter().collect();
            assert!(before.is_subset(&after));
            assert_eq!(after.difference(&before).count(), 1);
        }
    }

    #[test]
    fn newest_candle_is_last_in_rank_order() {
        assert_eq!(occupied_slots(day(5)).last().map(|s| s.get()), Some(3));
        assert_eq!(occupied_slots(day(8)).last().map(|s| s.get()), Some(0));
    }

    #[test]
    fn lighting_order_concrete_cases() {
        assert_eq!(indices(&lighting_order(day(1))), vec![4, 8]);
        assert_eq!(indices(&lighting_order(day(4))), vec![4, 5, 6, 7, 8]);
        assert_eq!(
            indices(&lighting_order(day(8))),
            vec![4, 0, 1, 2, 3, 5, 6, 7, 8]
        );
    }

    #[test]
    fn lighting_order_properties_hold_for_every_night() {
        for d in Day::ALL {
            let order = lighting_order(d);
            assert_eq!(order.len(), d.count() + 1);
            assert_eq!(order[0], SlotIndex::LIGHTER);
            assert!(order[1..].windows(2).all(|w| w[0] < w[1]));

            let rest: BTreeSet<_> = order[1..].iter().copied().collect();
            let occupied: BTreeSet<_> = occupied_slots(d).into_iter().collect();
            assert_eq!(rest, occupied);
        }
    }

    #[test]
    fn newest_candle_is_lit_right_after_lighter() {
        // Night 3: placed at 8, 7, 6; the newest (6) is lit first.
        assert_eq!(lighting_order(day(3))[1].get(), 6);
    }
}
