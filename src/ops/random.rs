use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices for random picks. Injected so callers and
/// tests can control which element gets chosen.
pub trait RandomSource {
    /// A uniformly chosen index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Unseeded, thread-local randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible randomness from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Pick a uniformly random element of `items`, or `None` when empty.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.next_index(items.len());
    items.get(idx.min(items.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn pick_from_empty_is_none() {
        let items: [u8; 0] = [];
        assert!(pick(&items, &mut Fixed(0)).is_none());
    }

    #[test]
    fn pick_uses_source_index() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&items, &mut Fixed(1)), Some(&"b"));
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        let items = ["a", "b"];
        assert_eq!(pick(&items, &mut Fixed(7)), Some(&"b"));
    }

    #[test]
    fn seeded_source_is_reproducible_and_in_range() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..50 {
            let x = a.next_index(5);
            assert_eq!(x, b.next_index(5));
            assert!(x < 5);
        }
    }

    #[test]
    fn thread_source_stays_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..50 {
            assert!(rng.next_index(3) < 3);
        }
    }
}
