//! Index arithmetic and the block rotation every algorithm in this crate is built from.

#[inline]
pub const fn odd(x: usize) -> bool {
    (x & 0x1) != 0
}

#[inline]
pub const fn twice(x: usize) -> usize {
    x << 1
}

#[inline]
pub const fn half_nonnegative(x: usize) -> usize {
    x >> 1
}

/// Returns the largest `m = 3^k - 1` with `k >= 1` and `m <= n`.
///
/// `n` must be at least 2.
pub fn largest_power_of_three_minus_one(n: usize) -> usize {
    debug_assert!(n > 1);

    // Comparing against (n - 2) / 3 instead of computing 3x + 2 <= n keeps the step from
    // overflowing close to usize::MAX.
    let limit = (n - 2) / 3;
    let mut x = 2;
    while x <= limit {
        x = x * 3 + 2;
    }

    x
}

/// Checks whether `n + 1` is a power of three. `0` qualifies as `3^0 - 1`.
pub fn is_power_of_three_minus_one(n: usize) -> bool {
    let mut x = 0;
    while x < n {
        match x.checked_mul(3).and_then(|x3| x3.checked_add(2)) {
            Some(next) => x = next,
            None => return false,
        }
    }

    x == n
}

/// Rotates `v[f..l]` so that `v[m..l]` precedes `v[f..m]`, both keeping their internal order.
///
/// Returns the new position of the element that was at `f`.
#[inline]
pub fn rotate<T>(v: &mut [T], f: usize, m: usize, l: usize) -> usize {
    debug_assert!(f <= m && m <= l);

    v[f..l].rotate_left(m - f);
    f + (l - m)
}
