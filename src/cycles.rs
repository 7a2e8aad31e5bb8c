//! Applies a permutation by walking its cycles, for slices of length `3^k - 1`.

use std::mem;
use std::ptr;

use crate::primitives::is_power_of_three_minus_one;

/// Index mapping consumed by [`rotate_cycles`].
pub trait CycleMap {
    /// Position whose element is moved into position `i`.
    fn source(&self, i: usize) -> usize;
}

/// Rotates every cycle of `map` over `v`, so that afterwards `v[i]` holds what was previously at
/// `v[map.source(i)]`.
///
/// Cycle representatives are taken from the sequence 0, 2, 8, 26, ... (`i = 3i + 2`). That visits
/// each cycle exactly once only for the in-shuffle style mappings on lengths of the form
/// `3^k - 1`, this is not a general purpose cycle follower.
///
/// Out of range indices returned by `map` panic. If `map` panics every element is still present
/// exactly once. A `map` that is not a bijection may cause the walk to never terminate.
pub fn rotate_cycles<T, M>(v: &mut [T], map: &M)
where
    M: CycleMap,
{
    let len = v.len();
    debug_assert!(is_power_of_three_minus_one(len));

    let mut i = 0;
    while i < len {
        rotate_cycle_from(v, i, map);
        i = i * 3 + 2;
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn rotate_cycle_from<T, M>(v: &mut [T], start: usize, map: &M)
where
    M: CycleMap,
{
    let len = v.len();
    assert!(start < len);

    let arr_ptr = v.as_mut_ptr();

    // SAFETY: `start` and every `j` are checked to be in-bounds before use. The value at `start`
    // is held in `tmp` and `hole.dest` always points at the single slot whose value currently
    // lives elsewhere. Each step moves one value into the hole and the hole to where that value
    // came from. If `map` or the bounds check panics, `hole` is dropped and fills the current
    // hole with `tmp`, so no value is lost or duplicated.
    unsafe {
        let tmp = mem::ManuallyDrop::new(ptr::read(arr_ptr.add(start)));
        let mut hole = CycleHole {
            src: &*tmp,
            dest: arr_ptr.add(start),
        };

        let mut j = map.source(start);
        while j != start {
            assert!(j < len, "cycle map returned {j} for a slice of length {len}");

            let j_ptr = arr_ptr.add(j);
            // A bijection never maps a non-start position onto itself, but other maps could.
            ptr::copy(j_ptr, hole.dest, 1);
            hole.dest = j_ptr;

            j = map.source(j);
        }
        // `hole` gets dropped and thus copies `tmp` into the last vacated slot.
    }
}

struct CycleHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for CycleHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the held value and `dest` to the vacated slot, see
        // `rotate_cycle_from`.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
