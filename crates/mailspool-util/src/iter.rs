//! Closure-driven range generation and keyed-map construction.

use std::collections::HashMap;
use std::hash::Hash;

/// Generates an inclusive range using a caller-supplied successor function.
///
/// The result always starts with `low` and ends with `high` once `step`
/// reaches it. If `low > high` the range is descending and `step` is
/// expected to move downwards.
///
/// The caller is responsible for ensuring `step` converges toward `high`;
/// a `step` that diverges, or that changes direction mid-sequence, iterates
/// without bound. Direction is fixed once from the initial `low`/`high`
/// comparison.
///
/// ```
/// use mailspool_util::range_with;
///
/// assert_eq!(range_with(1u32, 16, |x| x * 2), vec![1, 2, 4, 8, 16]);
/// assert_eq!(range_with(3i32, 0, |x| x - 1), vec![3, 2, 1, 0]);
/// assert_eq!(range_with(5i32, 5, |x| x + 1), vec![5]);
/// ```
pub fn range_with<T, S>(low: T, high: T, step: S) -> Vec<T>
where
    T: PartialOrd + Clone,
    S: FnMut(&T) -> T,
{
    let descending = low > high;
    range_while(low, high, step, move |current, high| {
        if descending { current > high } else { current < high }
    })
}

/// Generates an inclusive range with an explicit continuation predicate.
///
/// Like [`range_with`], but `keep_going(current, high)` decides whether
/// another `step` is taken, so `T` needs no ordering. The result always
/// contains at least `low`. Termination is the caller's contract: the
/// function appends `step(current)` for as long as the predicate holds.
///
/// ```
/// use mailspool_util::range_while;
///
/// // Step in halves, stop once within tolerance of the target.
/// let halves = range_while(8.0f64, 1.0, |x| x / 2.0, |current, high| current - high > 0.01);
/// assert_eq!(halves, vec![8.0, 4.0, 2.0, 1.0]);
/// ```
pub fn range_while<T, S, C>(low: T, high: T, mut step: S, mut keep_going: C) -> Vec<T>
where
    T: Clone,
    S: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    let mut data = vec![low.clone()];
    let mut current = low;
    while keep_going(&current, &high) {
        current = step(&current);
        data.push(current.clone());
    }
    data
}

/// Builds a map from a sequence, deriving each entry's key from the item.
///
/// The source is iterated exactly once, in order. When two items derive the
/// same key, the later one silently replaces the earlier.
///
/// ```
/// use mailspool_util::key_map;
///
/// let map = key_map(["alpha", "beta"], |s| s.len());
/// assert_eq!(map[&5], "alpha");
/// assert_eq!(map[&4], "beta");
/// ```
pub fn key_map<I, K, F>(iter: I, mut key_of: F) -> HashMap<K, I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut data = HashMap::new();
    for item in iter {
        let key = key_of(&item);
        data.insert(key, item);
    }
    data
}

/// Builds a map from a sequence, deriving both key and value per item.
///
/// Like [`key_map`], but the stored value is `value_of(item)` instead of the
/// item itself. For each item the key is computed before the value.
///
/// ```
/// use mailspool_util::key_map_with;
///
/// let map = key_map_with(["alpha", "beta"], |s| s.len(), str::to_uppercase);
/// assert_eq!(map[&5], "ALPHA");
/// ```
pub fn key_map_with<I, K, V, F, G>(iter: I, mut key_of: F, mut value_of: G) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
    G: FnMut(I::Item) -> V,
{
    let mut data = HashMap::new();
    for item in iter {
        let key = key_of(&item);
        data.insert(key, value_of(item));
    }
    data
}
