//! Helpers shared by the selection tests.

use std::cell::Cell;
use std::cmp::Ordering;

use rand::{Error, RngCore};

/// A value that counts every comparison made against it.
#[derive(Clone, Debug)]
pub(crate) struct Counted<'a> {
    pub value: u32,
    comparisons: &'a Cell<usize>,
}

impl PartialEq for Counted<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted<'_> {}

impl PartialOrd for Counted<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

pub(crate) fn counted<'a>(values: &[u32], comparisons: &'a Cell<usize>) -> Vec<Counted<'a>> {
    values
        .iter()
        .map(|&value| Counted { value, comparisons })
        .collect()
}

/// An RNG that only ever yields zero, so `gen_range(0..n)` always picks the
/// first index. On descending input this drives quickselect into its worst case.
pub(crate) struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        dest.fill(0);
        Ok(())
    }
}
