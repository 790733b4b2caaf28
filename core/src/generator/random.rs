use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that picks every symbol uniformly at random from a fixed alphabet.
#[derive(Clone, Debug)]
pub struct RandomPatternGenerator<S> {
    alphabet: Vec<S>,
    rng: SmallRng,
}

impl<S: Clone> RandomPatternGenerator<S> {
    /// # Panics
    ///
    /// When `alphabet` is empty.
    pub fn new(seed: u64, alphabet: Vec<S>) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must contain at least one symbol");
        Self {
            alphabet,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomPatternGenerator<Tile> {
    pub fn tiles(seed: u64) -> Self {
        Self::new(seed, Tile::ALL.to_vec())
    }
}

impl<S: Clone> PatternGenerator<S> for RandomPatternGenerator<S> {
    fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    fn next_symbol(&mut self) -> S {
        let index = self.rng.random_range(0..self.alphabet.len());
        self.alphabet[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_symbol_roughly_uniformly() {
        const SAMPLES: usize = 40_000;

        for size in 1..=8u8 {
            let alphabet: Vec<u8> = (0..size).collect();
            let mut generator = RandomPatternGenerator::new(u64::from(size), alphabet);
            let mut counts = vec![0usize; usize::from(size)];

            for _ in 0..SAMPLES {
                counts[usize::from(generator.next_symbol())] += 1;
            }

            let expected = SAMPLES / usize::from(size);
            for (symbol, &count) in counts.iter().enumerate() {
                assert!(
                    count.abs_diff(expected) < expected / 10,
                    "symbol {symbol} of {size} drawn {count} times, expected about {expected}"
                );
            }
        }
    }

    #[test]
    fn frequency_does_not_follow_alphabet_order() {
        let mut generator = RandomPatternGenerator::tiles(11);
        let mut counts = [0usize; 4];

        for _ in 0..20_000 {
            counts[usize::from(generator.next_symbol().index())] += 1;
        }

        let min = counts.iter().copied().min().unwrap();
        let max = counts.iter().copied().max().unwrap();
        assert!(max - min < 1_000, "skewed counts: {counts:?}");
    }

    #[test]
    fn initial_pattern_draws_from_alphabet() {
        let mut generator = RandomPatternGenerator::tiles(3);

        for _ in 0..100 {
            let pattern = generator.initial_pattern(2);
            assert_eq!(pattern.len(), 2);
            assert!(pattern.iter().all(|tile| Tile::ALL.contains(tile)));
        }
    }

    #[test]
    fn extend_appends_exactly_one_symbol() {
        let mut generator = RandomPatternGenerator::tiles(5);
        let mut pattern = generator.initial_pattern(2);

        for _ in 0..20 {
            let before = pattern.clone();
            let extended = generator.extend(&pattern);

            assert_eq!(pattern, before);
            assert_eq!(extended.len(), before.len() + 1);
            assert_eq!(&extended.as_slice()[..before.len()], before.as_slice());
            pattern = extended;
        }
    }

    #[test]
    fn same_seed_gives_same_pattern() {
        let a = RandomPatternGenerator::tiles(42).initial_pattern(16);
        let b = RandomPatternGenerator::tiles(42).initial_pattern(16);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_length_pattern_is_rejected() {
        RandomPatternGenerator::tiles(0).initial_pattern(0);
    }

    #[test]
    #[should_panic(expected = "at least one symbol")]
    fn empty_alphabet_is_rejected() {
        RandomPatternGenerator::<u8>::new(0, Vec::new());
    }
}
