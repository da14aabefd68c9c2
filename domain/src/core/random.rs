//! Random source abstraction
//!
//! Every randomized decision (tie-break shuffles, bean picks, gacha pulls)
//! goes through [`RandomSource`], so callers can inject a seeded generator
//! or a scripted sequence.

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn next_index(&self, upper: usize) -> usize;
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    // Out-of-range indices from a misbehaving source are folded back in range.
    items.get(rng.next_index(items.len()) % items.len())
}

/// Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1) % (i + 1);
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRandom;
    use super::*;

    #[test]
    fn test_pick_empty_is_none() {
        let rng = ScriptedRandom::new([]);
        let items: [u8; 0] = [];
        assert!(pick(&items, &rng).is_none());
    }

    #[test]
    fn test_pick_uses_source_index() {
        let rng = ScriptedRandom::new([2]);
        assert_eq!(pick(&["a", "b", "c"], &rng), Some(&"c"));
    }

    #[test]
    fn test_shuffle_with_zero_source_rotates() {
        // Always swapping with index 0 walks the first element to the back.
        let rng = ScriptedRandom::new([]);
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &rng);
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_shuffle_identity_sequence() {
        // j == i at every step leaves the slice untouched.
        let rng = ScriptedRandom::new([3, 2, 1]);
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &rng);
        assert_eq!(items, vec!['a', 'b', 'c', 'd']);
    }
}
