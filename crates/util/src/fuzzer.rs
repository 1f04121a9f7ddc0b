use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex, MutexGuard};

/// One step of a random mutation script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Delete(i64),
}

/// A fuzzer for generating random keys and mutation scripts.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use avl_index_util::Fuzzer;
///
/// let fuzzer = Fuzzer::from_u64(7);
/// let keys = fuzzer.keys(16, -100, 100);
/// assert_eq!(keys.len(), 16);
/// assert!(keys.iter().all(|k| (-100..=100).contains(k)));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Create a fuzzer from a short numeric seed, repeated across the 32 seed
    /// bytes.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_exact_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng().gen_range(min..=max)
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng().gen_bool(probability)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// `count` keys drawn uniformly from [min, max]; duplicates are allowed.
    pub fn keys(&self, count: usize, min: i64, max: i64) -> Vec<i64> {
        self.repeat(count, || self.random_int(min, max))
    }

    /// A mutation script of `count` steps over keys in [min, max].
    ///
    /// Deletes target a key inserted earlier in the script when possible, so
    /// roughly half of them hit a present key.
    pub fn ops(&self, count: usize, min: i64, max: i64, insert_probability: f64) -> Vec<Op> {
        let mut inserted = Vec::new();
        self.repeat(count, || {
            if inserted.is_empty() || self.random_bool(insert_probability) {
                let key = self.random_int(min, max);
                inserted.push(key);
                Op::Insert(key)
            } else if self.random_bool(0.5) {
                Op::Delete(*self.pick(&inserted))
            } else {
                Op::Delete(self.random_int(min, max))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let fuzzer = Fuzzer::new(None);
        let choices = vec![3, 5, 8];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let fuzzer1 = Fuzzer::from_u64(42);
        let fuzzer2 = Fuzzer::from_u64(42);

        assert_eq!(fuzzer1.seed, fuzzer2.seed);
        assert_eq!(fuzzer1.keys(32, 0, 1000), fuzzer2.keys(32, 0, 1000));
        assert_eq!(
            fuzzer1.ops(64, 0, 50, 0.6),
            fuzzer2.ops(64, 0, 50, 0.6)
        );
    }

    #[test]
    fn test_fuzzer_ops_start_with_insert() {
        let fuzzer = Fuzzer::from_u64(1);
        let ops = fuzzer.ops(200, -20, 20, 0.5);

        assert_eq!(ops.len(), 200);
        assert!(matches!(ops[0], Op::Insert(_)));
        for op in ops {
            let (Op::Insert(k) | Op::Delete(k)) = op;
            assert!((-20..=20).contains(&k));
        }
    }
}
