//! Order-statistic selection.
//!
//! Two selectors answer "what is the k-th smallest element?" for any `T: Ord + Clone`:
//!
//! - [`deterministic_select`]: median of medians, worst-case O(n).
//! - [`randomized_select`]: quickselect with a uniform random pivot, expected O(n).
//!   After a bounded number of random rounds it finishes the remaining range
//!   with median of medians, so adversarial inputs or pivot sources cannot
//!   drive it quadratic.
//!
//! Both clone the caller's slice into a working buffer and narrow it in place
//! using the three-way [`partition`]. They differ on empty input:
//! `deterministic_select` reports [`Error::InvalidRank`](crate::Error::InvalidRank)
//! while `randomized_select` returns `Ok(None)`.

pub mod group_median;
pub mod median_of_medians;
pub mod partition;
pub mod quickselect;

#[cfg(test)]
mod test_support;

pub use group_median::{group_medians, GROUP_SIZE};
pub use median_of_medians::{deterministic_select, deterministic_select_in_place};
pub use partition::{partition, PartitionBounds};
pub use quickselect::{
    default_round_limit, randomized_select, randomized_select_with_rng, Quickselect,
    QuickselectConfig,
};
