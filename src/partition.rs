//! Stable partition using only block rotations, no buffer beyond the `O(log n)` recursion.

use crate::primitives::{half_nonnegative, rotate};

/// Stable partition of `v` where `is_true` decides based on the element's index in `v`.
///
/// Elements for which `is_true` returns `false` end up in front of the ones for which it returns
/// `true`, each group keeping its relative order. Returns the start of the `true` group.
///
/// `is_true` is called exactly once per element, with the index the element had before the call
/// and a reference to it.
pub fn stable_partition_by_position<T, P>(v: &mut [T], is_true: P) -> usize
where
    P: FnMut(usize, &T) -> bool,
{
    let len = v.len();
    stable_partition_position_n(v, len, is_true).0
}

/// Stable partition of `v` by value, see [`stable_partition_by_position`].
pub fn stable_partition<T, P>(v: &mut [T], mut is_true: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    stable_partition_by_position(v, |_, elem| is_true(elem))
}

/// Stable partition of `v[..n]`, returns the end of the `false` group and the end of the `true`
/// group, which is always `n`. `v[n..]` is left untouched.
pub fn stable_partition_position_n<T, P>(v: &mut [T], n: usize, mut is_true: P) -> (usize, usize)
where
    P: FnMut(usize, &T) -> bool,
{
    assert!(n <= v.len());

    if n == 0 {
        return (0, 0);
    }

    partition_stable_position_n_nonempty(v, 0, n, &mut is_true)
}

// Partitions v[f..f + n]. Everything from f on has not been moved yet, so the index handed to the
// predicate is the original one.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition_stable_position_n_nonempty<T, P>(
    v: &mut [T],
    f: usize,
    n: usize,
    is_true: &mut P,
) -> (usize, usize)
where
    P: FnMut(usize, &T) -> bool,
{
    debug_assert!(n > 0);

    if n == 1 {
        return (f + !is_true(f, &v[f]) as usize, f + 1);
    }

    let h = half_nonnegative(n);
    let x = partition_stable_position_n_nonempty(v, f, h, is_true);
    let y = partition_stable_position_n_nonempty(v, x.1, n - h, is_true);

    // [false x | true x | false y | true y] -> [false x | false y | true x | true y]
    (rotate(v, x.0, x.1, y.0), y.1)
}
