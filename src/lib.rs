//! In-place permutation algorithms: stable partition by rotation, unstable removal, and the
//! in-shuffle together with its inverse.
//!
//! All routines work on caller owned slices and use no memory besides a few temporaries and, for
//! the stable partition, a recursion of depth `O(log n)`.

pub mod cycles;
pub mod partition;
pub mod patterns;
pub mod primitives;
pub mod remove;
pub mod shuffle;

pub use cycles::{rotate_cycles, CycleMap};
pub use partition::{stable_partition, stable_partition_by_position, stable_partition_position_n};
pub use remove::{remove_if_unstable, remove_if_unstable_vec};
pub use shuffle::{in_shuffle, in_shuffle_n, unweave, unweave_n, InShuffleMap, UnweaveMap};
