use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

/// Reproduzierbare Zufallsquelle für Startpositionen.
///
/// Der Seed wird mitgeführt, damit ein Layout über den Seed erneut erzeugt werden kann.
#[derive(Resource, Debug, Clone)]
pub struct SeedResource {
    pub seed: u64,
    rng: StdRng,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reset_with_new_seed(&mut self, seed: u64) {
        *self = Self::from_seed(seed);
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_numeric_seed() {
        let num = 1337u64;
        let s = SeedResource::from_seed(num);
        assert_eq!(s.seed, num);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeedResource::from_seed(7);
        let mut b = SeedResource::from_seed(7);
        for _ in 0..10 {
            assert_eq!(a.rng_mut().random::<f64>(), b.rng_mut().random::<f64>());
        }
    }

    #[test]
    fn test_reset_restarts_sequence() {
        let mut s = SeedResource::from_seed(42);
        let first = s.rng_mut().random::<f64>();
        s.rng_mut().random::<f64>();
        s.reset_with_new_seed(42);
        assert_eq!(s.rng_mut().random::<f64>(), first);
    }
}
