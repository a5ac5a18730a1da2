//! Lazy combinatoric generators.
//!
//! The prefix-sum recurrence, the wrap decomposition of groups, and the
//! set-cover subset search all enumerate combinatorial families. Everything
//! here produces values on demand, so callers can stop early without paying
//! for the whole space.

use itertools::Itertools;

/// Mathematical modulo: the result is always in `[0, m)` for positive `m`.
///
/// ```
/// assert_eq!(kmap_rs::utils::wrap(-1, 4), 3);
/// assert_eq!(kmap_rs::utils::wrap(6, 4), 2);
/// ```
pub fn wrap(a: i32, m: i32) -> i32 {
    a.rem_euclid(m)
}

/// All orderings of `items`, produced lazily.
pub fn permutations<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().permutations(items.len())
}

/// All `k`-element subsets of `items`, in lexicographic position order.
pub fn k_subsets<T: Clone>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().combinations(k)
}

/// Boolean vectors of length `n` containing exactly `k` trues.
pub fn weighted_masks(n: usize, k: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..n).combinations(k).map(move |positions| {
        let mut mask = vec![false; n];
        for position in positions {
            mask[position] = true;
        }
        mask
    })
}

/// All `2^n` boolean vectors of length `n`, fewest trues first.
pub fn all_masks(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..=n).flat_map(move |k| weighted_masks(n, k))
}

/// All subsets of `items`, smallest first, ending with the full set.
pub fn subsets<T: Clone>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (0..=items.len()).flat_map(move |k| k_subsets(items, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 4), 0);
        assert_eq!(wrap(3, 4), 3);
        assert_eq!(wrap(4, 4), 0);
        assert_eq!(wrap(-1, 4), 3);
        assert_eq!(wrap(-4, 4), 0);
        assert_eq!(wrap(-5, 4), 3);
    }

    #[test]
    fn test_permutations() {
        let perms: Vec<_> = permutations(&[1, 2, 3]).collect();
        assert_eq!(perms.len(), 6);
        assert!(perms.contains(&vec![3, 1, 2]));

        let empty: Vec<Vec<u8>> = permutations(&[]).collect();
        assert_eq!(empty, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_k_subsets() {
        let pairs: Vec<_> = k_subsets(&[1, 2, 3], 2).collect();
        assert_eq!(pairs, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
        assert_eq!(k_subsets(&[1, 2], 3).count(), 0);
    }

    #[test]
    fn test_weighted_masks() {
        let masks: Vec<_> = weighted_masks(4, 2).collect();
        assert_eq!(masks.len(), 6);
        for mask in &masks {
            assert_eq!(mask.iter().filter(|&&b| b).count(), 2);
        }
        assert!(masks.contains(&vec![true, false, true, false]));
    }

    #[test]
    fn test_weighted_masks_degenerate() {
        let masks: Vec<_> = weighted_masks(0, 0).collect();
        assert_eq!(masks, vec![Vec::<bool>::new()]);

        // More trues than slots: nothing to yield.
        assert_eq!(weighted_masks(2, 3).count(), 0);
    }

    #[test]
    fn test_all_masks() {
        let masks: Vec<_> = all_masks(3).collect();
        assert_eq!(masks.len(), 8);
        // Fewest trues first, and the all-true mask is present.
        assert_eq!(masks[0], vec![false, false, false]);
        assert_eq!(masks[7], vec![true, true, true]);
        let weights: Vec<usize> = masks
            .iter()
            .map(|m| m.iter().filter(|&&b| b).count())
            .collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_subsets() {
        let all: Vec<_> = subsets(&[1, 2, 3]).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Vec::<i32>::new());
        assert_eq!(all[7], vec![1, 2, 3]);
        assert!(all.windows(2).all(|w| w[0].len() <= w[1].len()));
    }
}
