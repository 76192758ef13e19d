/// Number of elements per group. Five is the smallest odd size for which the
/// median-of-medians recurrence `T(n) = T(n/5) + T(7n/10) + O(n)` stays linear.
pub const GROUP_SIZE: usize = 5;

/// Returns the median of every consecutive group of [`GROUP_SIZE`] elements.
///
/// Groups are taken left to right without overlap; the last one may be shorter.
/// Each group is sorted in place, so `v` comes back reordered within group
/// boundaries. The median of a group `g` is `g[g.len() / 2]`, which for an
/// even-sized trailing group is the upper of the two middle elements.
///
/// The result holds `ceil(v.len() / 5)` values.
pub fn group_medians<T: Ord + Clone>(v: &mut [T]) -> Vec<T> {
    let mut medians = Vec::with_capacity(v.len().div_ceil(GROUP_SIZE));
    for group in v.chunks_mut(GROUP_SIZE) {
        group.sort_unstable();
        medians.push(group[group.len() / 2].clone());
    }
    medians
}
