use crate::harness::HarnessError;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// An endless, reproducible stream of keys drawn uniformly from an inclusive range.
///
/// # Examples
///
/// ```
/// use bst_collections::harness::KeyGenerator;
///
/// let keys: Vec<i32> = KeyGenerator::new(42, 1, 100).unwrap().take(5).collect();
/// let again: Vec<i32> = KeyGenerator::new(42, 1, 100).unwrap().take(5).collect();
/// assert_eq!(keys, again);
/// assert!(keys.iter().all(|key| (1..=100).contains(key)));
/// ```
pub struct KeyGenerator {
    rng: Xoshiro256PlusPlus,
    range: Uniform<i32>,
}

impl KeyGenerator {
    pub fn new(seed: u64, min_key: i32, max_key: i32) -> Result<Self, HarnessError> {
        if min_key > max_key {
            return Err(HarnessError::InvalidConfig(format!(
                "empty key range {}..={}",
                min_key, max_key,
            )));
        }

        Ok(KeyGenerator {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            range: Uniform::new_inclusive(min_key, max_key),
        })
    }
}

impl Iterator for KeyGenerator {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(self.range.sample(&mut self.rng))
    }
}
