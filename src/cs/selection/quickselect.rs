use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::group_median::GROUP_SIZE;
use super::median_of_medians::{check_rank, select as median_of_medians};
use super::partition::partition;
use crate::error::Result;

/// Configuration for [`Quickselect`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickselectConfig {
    /// Seed for the pivot RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of random-pivot rounds allowed before the remaining range is
    /// handed to median of medians. `None` derives the limit from the input
    /// length, see [`default_round_limit`].
    pub round_limit: Option<usize>,
}

impl QuickselectConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_round_limit(mut self, round_limit: usize) -> Self {
        self.round_limit = Some(round_limit);
        self
    }

    fn round_limit_for(&self, len: usize) -> usize {
        self.round_limit.unwrap_or_else(|| default_round_limit(len))
    }
}

/// Round budget used when none is configured: four times the bit length of
/// `len`. A uniform pivot shrinks the range by a quarter per round on average,
/// so the random path finishes well within this on all but adversarial draws.
pub fn default_round_limit(len: usize) -> usize {
    4 * (usize::BITS - len.leading_zeros()) as usize
}

/// A quickselect that owns its random source.
///
/// ```
/// use orderstat::{Quickselect, QuickselectConfig};
///
/// let mut qs = Quickselect::new(QuickselectConfig::default().with_seed(42));
/// assert_eq!(qs.select(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], 5), Ok(Some(4)));
/// ```
#[derive(Debug, Clone)]
pub struct Quickselect<R = ChaCha8Rng> {
    rng: R,
    config: QuickselectConfig,
}

impl Quickselect<ChaCha8Rng> {
    pub fn new(config: QuickselectConfig) -> Self {
        let rng = match config.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng, config }
    }
}

impl Default for Quickselect<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(QuickselectConfig::default())
    }
}

impl<R: Rng> Quickselect<R> {
    /// Uses `rng` for pivot draws. `config.seed` is ignored.
    pub fn with_rng(rng: R, config: QuickselectConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &QuickselectConfig {
        &self.config
    }

    /// Returns the `k`-th smallest element of `collection`, or `None` when the
    /// collection is empty.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRank`](crate::Error::InvalidRank) when `collection` is
    /// non-empty and `k >= collection.len()`.
    pub fn select<T: Ord + Clone>(&mut self, collection: &[T], k: usize) -> Result<Option<T>> {
        let round_limit = self.config.round_limit_for(collection.len());
        select_with_limit(collection, k, round_limit, &mut self.rng)
    }
}

/// Returns the `k`-th smallest element (0-indexed) of `collection` in expected
/// linear time, drawing pivots from the thread-local RNG.
///
/// An empty collection yields `Ok(None)` whatever `k` is.
///
/// # Errors
///
/// [`Error::InvalidRank`](crate::Error::InvalidRank) when `collection` is
/// non-empty and `k >= collection.len()`.
pub fn randomized_select<T: Ord + Clone>(collection: &[T], k: usize) -> Result<Option<T>> {
    randomized_select_with_rng(collection, k, &mut rand::thread_rng())
}

/// [`randomized_select`] with a caller-supplied random source.
pub fn randomized_select_with_rng<T, R>(
    collection: &[T],
    k: usize,
    rng: &mut R,
) -> Result<Option<T>>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    select_with_limit(collection, k, default_round_limit(collection.len()), rng)
}

fn select_with_limit<T, R>(
    collection: &[T],
    k: usize,
    round_limit: usize,
    rng: &mut R,
) -> Result<Option<T>>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if collection.is_empty() {
        return Ok(None);
    }
    check_rank(collection.len(), k)?;
    trace!(
        "quickselect: len = {}, k = {}, round limit = {}",
        collection.len(),
        k,
        round_limit
    );

    let mut work = collection.to_vec();
    Ok(Some(quickselect(&mut work, k, round_limit, rng)))
}

fn quickselect<T, R>(mut v: &mut [T], mut k: usize, round_limit: usize, rng: &mut R) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    debug_assert!(k < v.len());

    let mut rounds = 0;
    loop {
        if v.len() <= GROUP_SIZE {
            v.sort_unstable();
            return v[k].clone();
        }

        if rounds == round_limit {
            debug!(
                "quickselect: {} random rounds left {} elements, finishing with median of medians",
                rounds,
                v.len()
            );
            return median_of_medians(v, k);
        }
        rounds += 1;

        let pivot = v[rng.gen_range(0..v.len())].clone();
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
