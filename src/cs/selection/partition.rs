/// Boundaries of a three-way partition.
///
/// After [`partition`] returns, the slice is laid out as
/// `[ < pivot | == pivot | > pivot ]` with the two inner boundaries stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionBounds {
    /// End of the `< pivot` region (exclusive).
    pub low_end: usize,
    /// Start of the `> pivot` region.
    pub high_start: usize,
    len: usize,
}

impl PartitionBounds {
    pub fn low_len(&self) -> usize {
        self.low_end
    }

    pub fn equal_len(&self) -> usize {
        self.high_start - self.low_end
    }

    pub fn high_len(&self) -> usize {
        self.len - self.high_start
    }

    /// Borrows the `low`, `equal` and `high` regions of a slice that was
    /// partitioned with these bounds.
    pub fn split<'a, T>(&self, v: &'a [T]) -> (&'a [T], &'a [T], &'a [T]) {
        debug_assert_eq!(v.len(), self.len);
        let (low, rest) = v.split_at(self.low_end);
        let (equal, high) = rest.split_at(self.high_start - self.low_end);
        (low, equal, high)
    }
}

/// Three-way partitions `v` around `pivot` in a single pass (Dutch national flag).
///
/// Elements less than the pivot end up at the front, elements greater than it at
/// the back, and every element equal to it in between. The relative order of
/// elements inside each region is not preserved. The pivot does not have to
/// occur in `v`; in that case the equal region is empty.
pub fn partition<T: Ord>(v: &mut [T], pivot: &T) -> PartitionBounds {
    let mut lt = 0;
    let mut i = 0;
    let mut gt = v.len();

    // v[..lt] < pivot, v[lt..i] == pivot, v[gt..] > pivot
    while i < gt {
        match v[i].cmp(pivot) {
            std::cmp::Ordering::Less => {
                v.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                v.swap(i, gt);
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }

    PartitionBounds {
        low_end: lt,
        high_start: gt,
        len: v.len(),
    }
}
