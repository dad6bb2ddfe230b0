//! Pair shuffling.
use log::debug;
use rand::{seq::SliceRandom, Rng};

use super::TrainingSet;

impl TrainingSet {
    /// Reorders pairs along a uniform random permutation drawn from `rng`,
    /// keeping each context with its target.
    pub fn shuffle<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let mut pairs: Vec<(Vec<String>, String)> = self.x.into_iter().zip(self.y).collect();
        debug!("shuffling {} pairs", pairs.len());
        pairs.shuffle(rng);

        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }
}
