use rand::{
    Rng,
    rngs::{StdRng, ThreadRng},
};

/// Source of the random choices made while generating a program.
pub trait RandomSource {
    /// Index in `0..len`. `len` must not be zero.
    fn choose(&mut self, len: usize) -> usize;
    /// Value in `min..=max`.
    fn between(&mut self, min: u32, max: u32) -> u32;
}

impl RandomSource for ThreadRng {
    fn choose(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn between(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }
}

impl RandomSource for StdRng {
    fn choose(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn between(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }
}

/// Deterministic source that always takes the first candidate and the lower
/// end of every range.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl RandomSource for FirstCandidate {
    fn choose(&mut self, _len: usize) -> usize {
        0
    }

    fn between(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            assert!(rng.choose(3) < 3);
            assert!((8..=12).contains(&rng.between(8, 12)));
        }
        assert_eq!(rng.between(5, 5), 5);
    }

    #[test]
    fn test_std_rng_covers_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];

        for _ in 0..200 {
            seen[(rng.between(2, 4) - 2) as usize] = true;
        }

        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_first_candidate() {
        let mut source = FirstCandidate;
        assert_eq!(source.choose(5), 0);
        assert_eq!(source.between(60, 70), 60);
    }
}
