//! In-place in-shuffle (perfect riffle) and its inverse.
//!
//! Based on Peiyush Jain, "A Simple In-Place Algorithm for In-Shuffle", 2004,
//! https://arxiv.org/abs/0805.1598v1
//!
//! For `h = n / 2` the in-shuffle moves `v[i]` to `2i + 1` and `v[h + i]` to `2i` for all `i < h`.
//! If `n` is odd the last element stays where it is. Both directions use `O(1)` extra space: the
//! largest prefix of length `3^k - 1` is permuted by following cycles, the rest is brought into
//! place with rotations and handled the same way.

use crate::cycles::{rotate_cycles, CycleMap};
use crate::primitives::{half_nonnegative, largest_power_of_three_minus_one, odd, rotate, twice};

/// Source mapping of the in-shuffle on a block of length `3^k - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InShuffleMap {
    half_len: usize,
}

impl InShuffleMap {
    pub fn new(len: usize) -> Self {
        Self {
            half_len: half_nonnegative(len),
        }
    }
}

impl CycleMap for InShuffleMap {
    #[inline]
    fn source(&self, i: usize) -> usize {
        if odd(i) {
            half_nonnegative(i)
        } else {
            half_nonnegative(i) + self.half_len
        }
    }
}

/// Source mapping of the unweave on a block of length `3^k - 1`, the inverse of [`InShuffleMap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnweaveMap {
    half_len: usize,
}

impl UnweaveMap {
    pub fn new(len: usize) -> Self {
        Self {
            half_len: half_nonnegative(len),
        }
    }
}

impl CycleMap for UnweaveMap {
    #[inline]
    fn source(&self, i: usize) -> usize {
        if i < self.half_len {
            twice(i) + 1
        } else {
            twice(i - self.half_len)
        }
    }
}

/// In-shuffles all of `v`, see [`in_shuffle_n`].
pub fn in_shuffle<T>(v: &mut [T]) -> usize {
    let len = v.len();
    in_shuffle_n(v, len)
}

/// In-shuffles `v[..n]` and returns `n`, the end of the shuffled range.
pub fn in_shuffle_n<T>(v: &mut [T], mut n: usize) -> usize {
    assert!(n <= v.len());

    if n < 2 {
        return n;
    }

    let mut f = 0;
    let mut m = largest_power_of_three_minus_one(n);
    loop {
        let half_n = half_nonnegative(n);
        let half_m = half_nonnegative(m);

        // Bring the first half_m elements of the upper half next to the first half_m elements of
        // the lower half. Afterwards v[f..l] is a complete block of length m.
        let l = rotate(v, f + half_m, f + half_n, f + half_n + half_m);
        rotate_cycles(&mut v[f..l], &InShuffleMap::new(m));

        n -= m;
        if n < 2 {
            return l + n;
        }

        f = l;
        while m > n {
            m /= 3;
        }
    }
}

/// Unweaves all of `v`, see [`unweave_n`].
pub fn unweave<T>(v: &mut [T]) -> (usize, usize) {
    let len = v.len();
    unweave_n(v, len)
}

/// Splits the interleaved `v[..n]` back into two blocks, undoing [`in_shuffle_n`].
///
/// Returns `(mid, end)`. `v[..mid]` holds the elements that were at odd positions and
/// `v[mid..end]` the ones that were at even positions. For odd `n` the last element is not part
/// of either block and stays at `n - 1 == end`.
pub fn unweave_n<T>(v: &mut [T], mut n: usize) -> (usize, usize) {
    assert!(n <= v.len());

    if n < 2 {
        return (0, n);
    }

    let mut t = largest_power_of_three_minus_one(n);
    rotate_cycles(&mut v[..t], &UnweaveMap::new(t));

    // v[..f] odd block, v[f..m] even block, v[m..] not processed yet.
    let mut m = t;
    let mut f = half_nonnegative(t);
    n -= t;

    while n > 1 {
        while t > n {
            t /= 3;
        }

        rotate_cycles(&mut v[m..m + t], &UnweaveMap::new(t));
        f = rotate(v, f, m, m + half_nonnegative(t));
        m += t;
        n -= t;
    }

    (f, m)
}
