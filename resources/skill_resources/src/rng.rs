use {
    bevy::prelude::*,
    rand::{Rng, RngCore, SeedableRng, rngs::StdRng, seq::SliceRandom},
};

/// Random source shared by deck dealing, reward rolls and question picks.
///
/// Any [`RngCore`] can be injected, so tests and replays can pin the sequence.
#[derive(Resource)]
pub struct SkillRng(Box<dyn RngCore + Send + Sync>);

impl Default for SkillRng {
    fn default() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }
}

impl SkillRng {
    pub fn from_rng(rng: impl RngCore + Send + Sync + 'static) -> Self {
        Self(Box::new(rng))
    }

    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Uniformly picks one element.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.0.random_range(0..items.len()))
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    /// Uniform random subset of at most `amount` elements.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        self.shuffle(&mut pool);
        pool.truncate(amount);
        pool
    }
}
