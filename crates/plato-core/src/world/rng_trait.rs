//! RNG trait abstraction for world generation
//!
//! Generation draws every random sample through this trait so callers pick
//! the source:
//! - `rand::thread_rng()` for a fresh world each run
//! - a seeded `Xoshiro256StarStar` for reproducible worlds and tests

/// Random number source for world generation
pub trait WorldRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Generate random f32 in [min, max)
    fn gen_range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.gen_f32() * (max - min)
    }
}

// Covers ThreadRng, StdRng and the xoshiro family alike
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_gen_range_stays_in_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        for _ in 0..1000 {
            let val = rng.gen_range_f32(0.0, std::f32::consts::FRAC_PI_2);
            assert!((0.0..std::f32::consts::FRAC_PI_2).contains(&val));
        }
        assert_eq!(rng.gen_range_f32(2.0, 2.0), 2.0);
    }

    #[test]
    fn test_check_probability_tracks_threshold() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);

        let hits = (0..10_000).filter(|_| rng.check_probability(0.25)).count();
        assert!((2200..2800).contains(&hits), "{} hits", hits);
    }
}
