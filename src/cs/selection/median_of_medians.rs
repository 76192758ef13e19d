use log::trace;

use super::group_median::{group_medians, GROUP_SIZE};
use super::partition::partition;
use crate::error::{Error, Result};

/// Returns the `k`-th smallest element (0-indexed) of `collection` in worst-case
/// linear time.
///
/// The pivot of every round is the median of the group medians, which always
/// lies between the 30th and 70th percentile of the current range. The caller's
/// slice is cloned into a working buffer and left untouched.
///
/// # Errors
///
/// [`Error::InvalidRank`] when `collection` is empty or `k >= collection.len()`.
///
/// # Example
///
/// ```
/// use orderstat::deterministic_select;
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
/// assert_eq!(deterministic_select(&data, 5), Ok(4));
/// ```
pub fn deterministic_select<T: Ord + Clone>(collection: &[T], k: usize) -> Result<T> {
    check_rank(collection.len(), k)?;
    trace!("median of medians: len = {}, k = {}", collection.len(), k);
    let mut work = collection.to_vec();
    Ok(select(&mut work, k))
}

/// Like [`deterministic_select`], but works directly inside `v` instead of a
/// copy. `v` is left in an unspecified order.
pub fn deterministic_select_in_place<T: Ord + Clone>(v: &mut [T], k: usize) -> Result<T> {
    check_rank(v.len(), k)?;
    Ok(select(v, k))
}

pub(crate) fn check_rank(len: usize, k: usize) -> Result<()> {
    if k >= len {
        return Err(Error::InvalidRank { rank: k, len });
    }
    Ok(())
}

/// Core loop. Only the pivot step recurses, on a fifth of the input, so the
/// stack depth is logarithmic. Narrowing into `low` or `high` reuses the loop.
pub(crate) fn select<T: Ord + Clone>(mut v: &mut [T], mut k: usize) -> T {
    debug_assert!(k < v.len());

    loop {
        if v.len() <= GROUP_SIZE {
            v.sort_unstable();
            return v[k].clone();
        }

        let mut medians = group_medians(v);
        // lower median when the count is even
        let mid = medians.len() / 2;
        let pivot = select(&mut medians, mid);

        let bounds = partition(v, &pivot);
        let rest = std::mem::take(&mut v);
        if k < bounds.low_end {
            v = &mut rest[..bounds.low_end];
        } else if k < bounds.high_start {
            return pivot;
        } else {
            k -= bounds.high_start;
            v = &mut rest[bounds.high_start..];
        }
    }
}
