//! Bogosort: shuffle the whole slice until it happens to be sorted.
//!
//! Expected *O*(*n* \* *n*!) and without any upper bound, a run may never finish. It is kept
//! as an absurd baseline for tiny inputs. An explicit shuffle ceiling can be opted into.

use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{is_sorted_by_less, Named, Sort, SortError};

#[derive(Debug, Default, Clone, Copy)]
pub struct BogoSort {
    seed: Option<u64>,
    max_shuffles: Option<u64>,
}

impl BogoSort {
    /// Entropy seeded, unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every run starts from the same generator state, making runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Gives up with [`SortError::ShuffleLimitExceeded`] after `max_shuffles` shuffles.
    pub fn with_max_shuffles(mut self, max_shuffles: u64) -> Self {
        self.max_shuffles = Some(max_shuffles);
        self
    }
}

impl Named for BogoSort {
    fn name(&self) -> &'static str {
        "Bogosort"
    }
}

impl<T> Sort<T> for BogoSort {
    fn sort_by_less<F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut shuffles = 0u64;
        while !is_sorted_by_less(v, is_less) {
            if self.max_shuffles.is_some_and(|max| shuffles >= max) {
                return Err(SortError::ShuffleLimitExceeded { shuffles });
            }

            v.shuffle(&mut rng);
            shuffles += 1;
        }

        trace!("bogosort needed {shuffles} shuffles for {} elements", v.len());

        Ok(())
    }
}
