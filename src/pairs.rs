//! Pair-relation existence queries over `i32` sequences.
//!
//! Each query asks whether two *distinct positions* `i != j` of a sequence
//! satisfy `seq[i] op seq[j] == target` for one of sum, product, or
//! difference. All three run in O(n) average time and O(n) space via a
//! per-call [`CountingSet`]: the table is created when the query starts and
//! dropped before it returns, so nothing is shared across calls.
//!
//! Candidate complements are computed in 64-bit arithmetic; a complement
//! that does not fit `i32` cannot match any real element and is skipped
//! while the scan continues. An allocation failure aborts the scan and
//! collapses to `false` — the queries may under-report on resource
//! exhaustion but never report a pair that does not exist.

use tracing::warn;

use crate::error::Error;
use crate::table::CountingSet;

/// True if two elements at distinct positions sum to `target`.
///
/// A self-pair (`target == 2 * x`) counts only when `x` occurs at two
/// different positions.
pub fn has_pair_sum(values: &[i32], target: i32) -> bool {
    if values.len() < 2 {
        return false;
    }
    pair_sum(values, target).unwrap_or_else(|err| {
        warn!(%err, query = "pair_sum", "aborting scan, reporting not-found");
        false
    })
}

/// True if two elements at distinct positions multiply to `target`.
///
/// `target == 0` holds iff a zero coexists with any other element (a second
/// zero included).
pub fn has_pair_product(values: &[i32], target: i32) -> bool {
    if values.len() < 2 {
        return false;
    }
    pair_product(values, target).unwrap_or_else(|err| {
        warn!(%err, query = "pair_product", "aborting scan, reporting not-found");
        false
    })
}

/// True if two elements at distinct positions differ by `target`, in either
/// order. `target == 0` reduces to duplicate detection.
pub fn has_pair_difference(values: &[i32], target: i32) -> bool {
    if values.len() < 2 {
        return false;
    }
    pair_difference(values, target).unwrap_or_else(|err| {
        warn!(%err, query = "pair_difference", "aborting scan, reporting not-found");
        false
    })
}

fn pair_sum(values: &[i32], target: i32) -> Result<bool, Error> {
    let mut seen = CountingSet::with_buckets(values.len())?;

    for &x in values {
        let complement = i64::from(target) - i64::from(x);
        // The table holds only elements at earlier positions, so a hit on
        // complement == x proves a genuine prior occurrence.
        if let Ok(complement) = i32::try_from(complement)
            && seen.contains(complement)
        {
            return Ok(true);
        }
        seen.insert(x)?;
    }
    Ok(false)
}

fn pair_product(values: &[i32], target: i32) -> Result<bool, Error> {
    let mut nonzero = CountingSet::with_buckets(values.len())?;
    let mut zeros = 0usize;

    for &x in values {
        if x == 0 {
            zeros += 1;
        } else {
            nonzero.insert(x)?;
        }
    }

    if target == 0 {
        // A zero paired with anything else, including another zero.
        return Ok((zeros >= 1 && !nonzero.is_empty()) || zeros >= 2);
    }

    for (key, count) in nonzero.iter() {
        let target = i64::from(target);
        let key_wide = i64::from(key);
        if target % key_wide != 0 {
            continue;
        }
        // i32::MIN / -1 lands here as an unrepresentable quotient.
        let Ok(needed) = i32::try_from(target / key_wide) else {
            continue;
        };
        if needed == key {
            if count >= 2 {
                return Ok(true);
            }
        } else if nonzero.contains(needed) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn pair_difference(values: &[i32], target: i32) -> Result<bool, Error> {
    let mut seen = CountingSet::with_buckets(values.len())?;

    for &x in values {
        // A prior y with x - y == target.
        let below = i64::from(x) - i64::from(target);
        if let Ok(below) = i32::try_from(below)
            && seen.contains(below)
        {
            return Ok(true);
        }
        // A prior y with y - x == target; redundant when target == 0.
        if target != 0 {
            let above = i64::from(x) + i64::from(target);
            if let Ok(above) = i32::try_from(above)
                && seen.contains(above)
            {
                return Ok(true);
            }
        }
        seen.insert(x)?;
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // Quadratic references the hash-based scans must agree with.

    fn brute_sum(values: &[i32], target: i32) -> bool {
        pairs(values).any(|(a, b)| a + b == i64::from(target))
    }

    fn brute_product(values: &[i32], target: i32) -> bool {
        pairs(values).any(|(a, b)| a * b == i64::from(target))
    }

    fn brute_difference(values: &[i32], target: i32) -> bool {
        pairs(values).any(|(a, b)| a - b == i64::from(target) || b - a == i64::from(target))
    }

    fn pairs(values: &[i32]) -> impl Iterator<Item = (i64, i64)> + '_ {
        (0..values.len()).flat_map(move |i| {
            (i + 1..values.len()).map(move |j| (i64::from(values[i]), i64::from(values[j])))
        })
    }

    #[test]
    fn test_short_sequences_are_always_false() {
        for values in [&[][..], &[7][..]] {
            assert!(!has_pair_sum(values, 14));
            assert!(!has_pair_product(values, 49));
            assert!(!has_pair_difference(values, 0));
        }
    }

    #[test]
    fn test_pair_sum_scenarios() {
        let seq = [10, -5, 20, 5, 15, -5, 20];
        assert!(has_pair_sum(&seq, 15)); // 10 + 5
        assert!(!has_pair_sum(&seq, 100));
    }

    #[test]
    fn test_pair_sum_self_pair_needs_two_occurrences() {
        // target == 2 * 5: one 5 is not a pair, two are.
        assert!(!has_pair_sum(&[5, 1, 2], 10));
        assert!(has_pair_sum(&[5, 1, 5], 10));
    }

    #[test]
    fn test_pair_sum_unrepresentable_complement_is_skipped() {
        // Complement of i32::MAX for target i32::MIN is out of range; the
        // scan must keep going and find -3 + 2.
        assert!(!has_pair_sum(&[i32::MAX, i32::MAX], i32::MIN));
        assert!(has_pair_sum(&[i32::MAX, -3, 2], -1));
    }

    #[test]
    fn test_pair_sum_extreme_values() {
        assert!(has_pair_sum(&[i32::MAX, -1], i32::MAX - 1));
        assert!(has_pair_sum(&[i32::MIN, 1], i32::MIN + 1));
        assert!(!has_pair_sum(&[i32::MIN, i32::MIN], 0));
    }

    #[test]
    fn test_pair_product_zero_target() {
        assert!(has_pair_product(&[5, -2, 10, 0, 5, 8], 0)); // zero with non-zero
        assert!(has_pair_product(&[0, 0], 0)); // two zeros
        assert!(!has_pair_product(&[0], 0)); // size < 2
        assert!(!has_pair_product(&[3, 4, 5], 0)); // no zero at all
    }

    #[test]
    fn test_pair_product_scenarios() {
        let seq = [5, -2, 10, 0, 5, 8];
        assert!(has_pair_product(&seq, 40)); // 5 * 8
        assert!(has_pair_product(&seq, -20)); // -2 * 10
        assert!(has_pair_product(&seq, 25)); // 5 * 5, two occurrences
        assert!(!has_pair_product(&seq, 99));
        assert!(!has_pair_product(&[1, 2, 3], 100));
    }

    #[test]
    fn test_pair_product_self_pair_needs_count_two() {
        assert!(!has_pair_product(&[5, 2, 3], 25));
        assert!(has_pair_product(&[5, 2, 5], 25));
    }

    #[test]
    fn test_pair_product_int_min_quotient_skipped() {
        // i32::MIN % -1 == 0 but the quotient 2^31 fits no element.
        assert!(!has_pair_product(&[-1, 7, 3], i32::MIN));
        assert!(has_pair_product(&[1, i32::MIN, 3], i32::MIN));
    }

    #[test]
    fn test_pair_difference_zero_is_duplicate_detection() {
        assert!(has_pair_difference(&[5, -2, 10, 0, 5, 8], 0)); // two 5's
        assert!(!has_pair_difference(&[1, 2, 3], 0));
    }

    #[test]
    fn test_pair_difference_both_orders() {
        let seq = [5, -2, 10, 0, 5, 8];
        assert!(has_pair_difference(&seq, 5)); // 5 - 0
        assert!(has_pair_difference(&seq, 3)); // 8 - 5
        assert!(has_pair_difference(&seq, -3)); // same pair, other sign
        assert!(!has_pair_difference(&seq, 100));
    }

    #[test]
    fn test_pair_difference_unrepresentable_candidates_skipped() {
        // x + target overflows i32 for every element; must not panic and
        // must still find i32::MAX - 0.
        assert!(has_pair_difference(&[i32::MAX, 0], i32::MAX));
        assert!(!has_pair_difference(&[i32::MAX, i32::MAX - 1], i32::MIN));
    }

    proptest! {
        #[test]
        fn prop_pair_sum_matches_brute_force(
            values in proptest::collection::vec(-100i32..=100, 0..20),
            target in -250i32..=250,
        ) {
            prop_assert_eq!(has_pair_sum(&values, target), brute_sum(&values, target));
        }

        #[test]
        fn prop_pair_product_matches_brute_force(
            values in proptest::collection::vec(-100i32..=100, 0..20),
            target in -250i32..=250,
        ) {
            prop_assert_eq!(has_pair_product(&values, target), brute_product(&values, target));
        }

        #[test]
        fn prop_pair_difference_matches_brute_force(
            values in proptest::collection::vec(-100i32..=100, 0..20),
            target in -250i32..=250,
        ) {
            prop_assert_eq!(
                has_pair_difference(&values, target),
                brute_difference(&values, target)
            );
        }

        #[test]
        fn prop_pair_sum_invariant_under_permutation(
            values in proptest::collection::vec(-100i32..=100, 0..20),
            target in -250i32..=250,
        ) {
            let forward = has_pair_sum(&values, target);

            let mut reversed = values.clone();
            reversed.reverse();
            prop_assert_eq!(has_pair_sum(&reversed, target), forward);

            let mut sorted = values.clone();
            sorted.sort_unstable();
            prop_assert_eq!(has_pair_sum(&sorted, target), forward);
        }

        #[test]
        fn prop_difference_zero_iff_duplicate(
            values in proptest::collection::vec(-20i32..=20, 2..20),
        ) {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            let has_duplicate = sorted.windows(2).any(|w| w[0] == w[1]);
            prop_assert_eq!(has_pair_difference(&values, 0), has_duplicate);
        }
    }
}
